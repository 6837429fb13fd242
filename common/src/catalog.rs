//! # Form Catalog
//!
//! Owns the list of [`FormTemplate`]s end users choose from. The list is kept
//! in a [`KeyValueStore`] under [`CATALOG_KEY`] as one JSON array.
//!
//! ## Persistence rules
//!
//! - Loading an empty (or never written) catalog materializes the
//!   "General Feedback" template and writes it once.
//! - Every successful mutation rewrites the **entire** list; there are no
//!   partial updates.
//! - A mutation that fails validation writes nothing.
//!
//! Mutations are read-modify-write on the in-memory copy taken at load time.
//! Two administrators editing at once will overwrite each other (last writer
//! wins); the portal assumes a single active administrator.

use log::debug;
use uuid::Uuid;

use crate::error::{CatalogError, ValidationError};
use crate::model::template::FormTemplate;
use crate::storage::KeyValueStore;

pub const CATALOG_KEY: &str = "feedbackForms";

pub struct FormCatalog<S: KeyValueStore> {
    storage: S,
    forms: Vec<FormTemplate>,
}

impl<S: KeyValueStore> FormCatalog<S> {
    /// Reads the persisted catalog, creating the default template when it is
    /// empty.
    ///
    /// # Errors
    /// - [`CatalogError::Storage`] if the storage cannot be read or written.
    /// - [`CatalogError::Corrupt`] if the stored value is not a JSON array of
    ///   templates.
    pub fn load_or_initialize(storage: S) -> Result<Self, CatalogError> {
        let forms: Vec<FormTemplate> = match storage.get(CATALOG_KEY)? {
            Some(raw) if !raw.trim().is_empty() && raw.trim() != "null" => {
                serde_json::from_str(&raw)?
            }
            _ => Vec::new(),
        };

        let mut catalog = Self { storage, forms };
        if catalog.forms.is_empty() {
            debug!("form catalog is empty, creating the default template");
            catalog.forms.push(FormTemplate::default_template());
            catalog.persist()?;
        }
        Ok(catalog)
    }

    pub fn forms(&self) -> &[FormTemplate] {
        &self.forms
    }

    pub fn find(&self, id: &str) -> Option<&FormTemplate> {
        self.forms.iter().find(|f| f.id == id)
    }

    /// Appends a new template with a fresh id and persists the list.
    pub fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
    ) -> Result<&FormTemplate, CatalogError> {
        let title = required_title(title)?;
        let mut template = FormTemplate::new(title, clean_description(description));
        while self.find(&template.id).is_some() {
            template.id = Uuid::new_v4().to_string();
        }

        self.forms.push(template);
        self.persist()?;
        Ok(&self.forms[self.forms.len() - 1])
    }

    /// Replaces title and description of the template with `id`.
    ///
    /// An unknown id changes nothing but the list is still written back.
    pub fn update(
        &mut self,
        id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<(), CatalogError> {
        let title = required_title(title)?;
        if let Some(form) = self.forms.iter_mut().find(|f| f.id == id) {
            form.title = title.to_string();
            form.description = clean_description(description);
        }
        self.persist()
    }

    /// Drops the template with `id`; unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Result<(), CatalogError> {
        self.forms.retain(|f| f.id != id);
        self.persist()
    }

    fn persist(&self) -> Result<(), CatalogError> {
        let raw = serde_json::to_string(&self.forms)?;
        debug!("writing form catalog ({} templates)", self.forms.len());
        self.storage.set(CATALOG_KEY, &raw)?;
        Ok(())
    }
}

fn required_title(title: &str) -> Result<&str, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        Err(ValidationError::empty("title"))
    } else {
        Ok(title)
    }
}

fn clean_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStore;

    fn stored(store: &MemoryStore) -> Vec<FormTemplate> {
        serde_json::from_str(&store.get(CATALOG_KEY).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn empty_storage_gets_default_template() {
        let store = MemoryStore::new();
        let catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();

        assert_eq!(catalog.forms().len(), 1);
        assert_eq!(catalog.forms()[0].title, "General Feedback");
        assert_eq!(stored(&store), catalog.forms());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn existing_catalog_is_loaded_without_writing() {
        let store = MemoryStore::new();
        store
            .set(CATALOG_KEY, r#"[{"id":1,"title":"Support"},{"id":"b","title":"Sales"}]"#)
            .unwrap();
        let catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();

        let titles: Vec<_> = catalog.forms().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Support", "Sales"]);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn empty_array_is_reinitialized() {
        let store = MemoryStore::new();
        store.set(CATALOG_KEY, "[]").unwrap();
        let catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();
        assert_eq!(catalog.forms()[0].title, "General Feedback");
    }

    #[test]
    fn corrupt_catalog_is_reported() {
        let store = MemoryStore::new();
        store.set(CATALOG_KEY, "{not json").unwrap();
        assert!(matches!(
            FormCatalog::load_or_initialize(store),
            Err(CatalogError::Corrupt(_))
        ));
    }

    #[test]
    fn add_appends_with_unique_id() {
        let store = MemoryStore::new();
        let mut catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();

        for i in 0..5 {
            let before = catalog.forms().len();
            let added = catalog.add(&format!("Form {i}"), Some("desc")).unwrap().clone();
            assert_eq!(catalog.forms().len(), before + 1);
            assert_eq!(catalog.find(&added.id), Some(&added));
        }

        let ids: HashSet<_> = catalog.forms().iter().map(|f| f.id.clone()).collect();
        assert_eq!(ids.len(), catalog.forms().len());
        assert_eq!(stored(&store), catalog.forms());
    }

    #[test]
    fn add_with_blank_title_changes_nothing() {
        let store = MemoryStore::new();
        let mut catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();
        let writes = store.writes();

        for title in ["", "   "] {
            let err = catalog.add(title, Some("desc")).unwrap_err();
            assert!(matches!(err, CatalogError::Validation(_)));
        }
        assert_eq!(catalog.forms().len(), 1);
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn update_replaces_text_but_keeps_id() {
        let store = MemoryStore::new();
        let mut catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();
        let id = catalog.add("Support", None).unwrap().id.clone();

        catalog.update(&id, "Support desk", Some("  ")).unwrap();

        let form = catalog.find(&id).unwrap();
        assert_eq!(form.title, "Support desk");
        assert_eq!(form.description, None);
        assert_eq!(stored(&store), catalog.forms());
    }

    #[test]
    fn update_with_blank_title_changes_nothing() {
        let store = MemoryStore::new();
        let mut catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();
        let id = catalog.forms()[0].id.clone();
        let before = catalog.forms().to_vec();
        let writes = store.writes();

        assert!(matches!(
            catalog.update(&id, "", None),
            Err(CatalogError::Validation(_))
        ));
        assert_eq!(catalog.forms(), before.as_slice());
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn update_of_unknown_id_still_persists() {
        let store = MemoryStore::new();
        let mut catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();
        let before = catalog.forms().to_vec();
        let writes = store.writes();

        catalog.update("missing", "Whatever", None).unwrap();
        assert_eq!(catalog.forms(), before.as_slice());
        assert_eq!(store.writes(), writes + 1);
    }

    #[test]
    fn remove_filters_by_id() {
        let store = MemoryStore::new();
        let mut catalog = FormCatalog::load_or_initialize(store.clone()).unwrap();
        let id = catalog.add("Support", None).unwrap().id.clone();

        catalog.remove(&id).unwrap();
        assert!(catalog.find(&id).is_none());
        assert_eq!(catalog.forms().len(), 1);

        catalog.remove("missing").unwrap();
        assert_eq!(catalog.forms().len(), 1);
        assert_eq!(stored(&store), catalog.forms());
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            })
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn storage_failure_on_initialize_is_surfaced() {
        assert!(matches!(
            FormCatalog::load_or_initialize(ReadOnlyStore),
            Err(CatalogError::Storage(StorageError::Write { .. }))
        ));
    }
}
