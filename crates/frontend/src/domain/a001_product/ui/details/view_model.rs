use crate::domain::a001_product::api;
use crate::shared::browser;
use contracts::domain::a001_product::aggregate::{Product, ProductDto, ProductId};
use contracts::shared::validation::ValidationError;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// Where a valid form goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(ProductId),
}

impl SaveTarget {
    pub fn method(&self) -> &'static str {
        match self {
            SaveTarget::Create => "POST",
            SaveTarget::Update(_) => "PUT",
        }
    }

    pub fn path(&self) -> String {
        match self {
            SaveTarget::Create => api::product_path(None),
            SaveTarget::Update(id) => api::product_path(Some(*id)),
        }
    }
}

/// Validate the form and pick create or update by the presence of an id.
/// An invalid form has no target and so never reaches the network.
pub fn save_target(dto: &ProductDto) -> Result<SaveTarget, ValidationError> {
    dto.validate()?;
    Ok(match dto.id {
        Some(id) => SaveTarget::Update(id),
        None => SaveTarget::Create,
    })
}

/// ViewModel of the product form (create and update)
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub image_input: NodeRef<Input>,
    image: StoredValue<Option<File>, LocalStorage>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            image_input: NodeRef::new(),
            image: StoredValue::new_local(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    /// Fill the form from a cached record for editing
    pub fn load_from(&self, product: &Product) {
        self.form.set(ProductDto::from(product));
        self.error.set(None);
        self.clear_image();
    }

    pub fn set_image(&self, file: Option<File>) {
        self.image.set_value(file);
    }

    fn clear_image(&self) {
        self.image.set_value(None);
        if let Some(input) = self.image_input.get_untracked() {
            input.set_value("");
        }
    }

    pub fn reset(&self) {
        self.form.set(ProductDto::default());
        self.error.set(None);
        self.clear_image();
    }

    /// Validate and send the form: POST for a new product, PUT when an id
    /// is present. Invalid forms are rejected before any request.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();

        let target = match save_target(&current) {
            Ok(target) => target,
            Err(e) => {
                let msg = e.to_string();
                browser::alert(&msg);
                self.error.set(Some(msg));
                return;
            }
        };

        let image = self.image.get_value();
        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let result = match target {
                SaveTarget::Create => api::create_product(&current, image).await,
                SaveTarget::Update(id) => api::update_product(id, &current, image).await,
            };
            match result {
                Ok(()) => {
                    this.reset();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Помилка збереження товару: {}", e);
                    let msg = format!("Не вдалося зберегти товар: {}", e);
                    browser::alert(&msg);
                    this.error.set(Some(msg));
                }
            }
            this.saving.set(false);
        });
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductDto {
        ProductDto {
            name: "Стіл".into(),
            quantity: "2".into(),
            price: "1500".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_form_has_no_target() {
        for dto in [
            ProductDto::default(),
            ProductDto { name: String::new(), ..filled() },
            ProductDto { quantity: " ".into(), ..filled() },
            ProductDto { price: String::new(), ..filled() },
        ] {
            assert_eq!(save_target(&dto), Err(ValidationError::MissingRequired));
        }
        assert!(save_target(&ProductDto { quantity: "два".into(), ..filled() }).is_err());
    }

    #[test]
    fn test_new_product_is_posted() {
        let target = save_target(&filled()).unwrap();
        assert_eq!(target, SaveTarget::Create);
        assert_eq!(target.method(), "POST");
        assert_eq!(target.path(), "/products");
    }

    #[test]
    fn test_edited_product_is_put_by_id() {
        let dto = ProductDto { id: Some(ProductId(7)), ..filled() };
        let target = save_target(&dto).unwrap();
        assert_eq!(target, SaveTarget::Update(ProductId(7)));
        assert_eq!(target.method(), "PUT");
        assert_eq!(target.path(), "/products/7");
    }
}
