// SPDX-FileCopyrightText: 2026 OptiRoute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the OptiRoute router.
//!
//! This crate provides the error type and the [`ProviderAdapter`] trait that
//! every model provider implements. The routing engine itself lives in
//! `optiroute-router`; concrete providers live in their own crates.

pub mod error;
pub mod traits;

pub use error::OptirouteError;
pub use traits::ProviderAdapter;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl ProviderAdapter for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn model_id(&self) -> &str {
            "echo-1"
        }

        async fn invoke(&self, prompt: &str) -> Result<String, OptirouteError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn provider_adapter_is_object_safe() {
        let provider: Box<dyn ProviderAdapter> = Box::new(Echo);
        assert_eq!(provider.name(), "echo");
        assert_eq!(provider.invoke("hello").await.unwrap(), "hello");
    }
}
