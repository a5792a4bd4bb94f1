use std::marker::PhantomData;

use contracts::shared::{Encoding, EntityId, ListQuery, ListResponse, Resource};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use super::client::{use_api, ApiClient, WriteMethod};
use super::error::ApiError;

/// File sent as an extra multipart part.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub field: &'static str,
    pub file: File,
}

/// What a modal form asks the gateway to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<D> {
    Create(D),
    Update { id: EntityId, draft: D },
}

impl<D> Submission<D> {
    pub fn is_create(&self) -> bool {
        matches!(self, Submission::Create(_))
    }
}

/// Typed CRUD access to one backend resource.
pub struct Gateway<R: Resource> {
    client: ApiClient,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for Gateway<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> Gateway<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    pub async fn list(&self, query: ListQuery) -> Result<ListResponse<R::Record>, ApiError> {
        self.client.get_json(&R::list_path(), &query).await
    }

    pub async fn create(
        &self,
        draft: &R::Draft,
        attachment: Option<Attachment>,
    ) -> Result<(), ApiError> {
        self.write(WriteMethod::Post, &R::create_path(), draft, attachment)
            .await
    }

    pub async fn update(
        &self,
        id: EntityId,
        draft: &R::Draft,
        attachment: Option<Attachment>,
    ) -> Result<(), ApiError> {
        self.write(WriteMethod::Patch, &R::update_path(id), draft, attachment)
            .await
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        self.client.delete(&R::delete_path(id)).await
    }

    /// Dispatch a form submission to `create` or `update`.
    pub async fn submit(
        &self,
        submission: Submission<R::Draft>,
        attachment: Option<Attachment>,
    ) -> Result<(), ApiError> {
        match submission {
            Submission::Create(draft) => self.create(&draft, attachment).await,
            Submission::Update { id, draft } => self.update(id, &draft, attachment).await,
        }
    }

    async fn write(
        &self,
        method: WriteMethod,
        path: &str,
        draft: &R::Draft,
        attachment: Option<Attachment>,
    ) -> Result<(), ApiError> {
        match R::ENCODING {
            Encoding::Json => self.client.send_json(method, path, draft).await,
            Encoding::Multipart => {
                let form = multipart_body(draft, attachment.as_ref())?;
                self.client.send_multipart(method, path, form).await
            }
        }
    }
}

/// Gateway for `R` backed by the context client.
pub fn use_gateway<R: Resource>() -> Gateway<R> {
    Gateway::new(use_api())
}

/// Flatten a draft into multipart text parts. Null fields are left out.
pub fn form_fields<B: Serialize>(body: &B) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(ApiError::Encode("draft is not an object".to_string()));
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ApiError::Encode(format!("field `{}` is not a scalar", key)))
            }
        };
        fields.push((key, text));
    }
    Ok(fields)
}

fn multipart_body<B: Serialize>(
    body: &B,
    attachment: Option<&Attachment>,
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_encode_error)?;
    for (key, value) in form_fields(body)? {
        form.append_with_str(&key, &value)
            .map_err(js_encode_error)?;
    }
    if let Some(attachment) = attachment {
        form.append_with_blob_and_filename(
            attachment.field,
            &attachment.file,
            &attachment.file.name(),
        )
        .map_err(js_encode_error)?;
    }
    Ok(form)
}

fn js_encode_error(err: JsValue) -> ApiError {
    ApiError::Encode(format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_category::CategoryDto;
    use contracts::domain::a004_product::ProductDto;

    #[test]
    fn test_form_fields_skip_nulls() {
        let dto = CategoryDto {
            name: "Mevalar".into(),
            order: None,
        };
        assert_eq!(
            form_fields(&dto).unwrap(),
            vec![("name".to_string(), "Mevalar".to_string())]
        );

        let dto = CategoryDto {
            name: "Mevalar".into(),
            order: Some(3),
        };
        let fields = form_fields(&dto).unwrap();
        assert!(fields.contains(&("order".to_string(), "3".to_string())));
    }

    #[test]
    fn test_form_fields_stringify_numbers() {
        let dto = ProductDto {
            name: "Olma".into(),
            price: "12.50".into(),
            category: 4,
            unity: 2,
            description: String::new(),
            quantity_left: Some("10".into()),
            min_quantity: None,
        };
        let fields = form_fields(&dto).unwrap();
        assert!(fields.contains(&("price".to_string(), "12.50".to_string())));
        assert!(fields.contains(&("category".to_string(), "4".to_string())));
        assert!(fields.contains(&("unity".to_string(), "2".to_string())));
        assert!(fields.contains(&("quantity_left".to_string(), "10".to_string())));
        assert!(!fields.iter().any(|(k, _)| k == "min_quantity"));
    }

    #[test]
    fn test_form_fields_reject_non_objects() {
        assert!(matches!(form_fields(&42), Err(ApiError::Encode(_))));
    }

    #[test]
    fn test_submission_kind() {
        assert!(Submission::Create(()).is_create());
        assert!(!Submission::Update { id: 1, draft: () }.is_create());
    }
}
