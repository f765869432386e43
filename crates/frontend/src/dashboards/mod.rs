pub mod d400_supply;
