//! Unit tests for search error types

#[cfg(test)]
mod tests {
    use crate::resource::ResourceType;
    use crate::search::error::{InputError, SearchError};
    use std::error::Error;

    #[test]
    fn test_unresolvable_code_escapes_control_chars() {
        let error = SearchError::UnresolvableTypeCode {
            name: "age".to_string(),
            variant: "v1".to_string(),
            code: "\u{0c}".to_string(),
        };
        let message = error.to_string();
        assert_eq!(message, "Unresolvable type code '\\u{c}' for hit age (v1)");
    }

    #[test]
    fn test_unknown_resource_type_message() {
        let error = SearchError::UnknownResourceType(ResourceType::Model);
        assert_eq!(
            error.to_string(),
            "Unknown resource type: no registry entry for Model"
        );
    }

    #[test]
    fn test_search_error_source_none() {
        let error = SearchError::UnknownResourceType(ResourceType::User);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_input_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "hits.json");
        let error: InputError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_input_error_from_json() {
        let json_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error = InputError::from(json_error);

        match error {
            InputError::Json(_) => {}
            other => panic!("Expected Json variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
        assert_send_sync::<InputError>();
    }

    #[test]
    fn test_error_pattern_matching() {
        let errors = vec![
            SearchError::UnknownResourceType(ResourceType::Feature),
            SearchError::UnresolvableTypeCode {
                name: "n".to_string(),
                variant: "v".to_string(),
                code: "?".to_string(),
            },
        ];

        for error in errors {
            match error {
                SearchError::UnknownResourceType(ty) => assert_eq!(ty, ResourceType::Feature),
                SearchError::UnresolvableTypeCode { code, .. } => assert_eq!(code, "?"),
            }
        }
    }
}
