use crate::billing::billing_model::{CheckoutMode, CheckoutRequest, CheckoutSession};
use crate::billing::billing_traits::{BillingGatewayTrait, BillingServiceTrait};
use crate::errors::{ConfigError, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

/// Prefix used by unconfigured placeholder identifiers
/// (e.g. `YOUR_MONTHLY_PRICE_ID`).
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Mediates the hosted checkout and customer-portal flows.
///
/// Checkout is refused locally when the payment processor is not
/// configured (no publishable key, or a placeholder price id), so no
/// remote call is attempted in that state.
pub struct BillingService {
    billing_gateway: Arc<dyn BillingGatewayTrait>,
    publishable_key: Option<String>,
}

impl BillingService {
    pub fn new(
        billing_gateway: Arc<dyn BillingGatewayTrait>,
        publishable_key: Option<String>,
    ) -> Self {
        BillingService {
            billing_gateway,
            publishable_key,
        }
    }

    fn ensure_configured(&self, price_id: &str) -> Result<()> {
        match &self.publishable_key {
            None => Err(ConfigError::MissingKey("publishable key".to_string()).into()),
            Some(key) if key.starts_with(PLACEHOLDER_PREFIX) => {
                Err(ConfigError::Placeholder("publishable key".to_string()).into())
            }
            Some(_) if price_id.starts_with(PLACEHOLDER_PREFIX) => {
                Err(ConfigError::Placeholder(price_id.to_string()).into())
            }
            Some(_) => Ok(()),
        }
    }
}

#[async_trait]
impl BillingServiceTrait for BillingService {
    async fn start_checkout(
        &self,
        price_id: &str,
        mode: CheckoutMode,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<CheckoutSession> {
        self.ensure_configured(price_id)?;

        let request = CheckoutRequest {
            price_id: price_id.to_string(),
            mode,
            success_url: success_url.to_string(),
            cancel_url: cancel_url.to_string(),
        };
        let session = self.billing_gateway.create_checkout_session(request).await?;
        debug!("Created checkout session {}", session.session_id);
        Ok(session)
    }

    async fn open_portal(&self, return_url: &str) -> Result<String> {
        self.billing_gateway.create_portal_session(return_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::PlanTier;
    use crate::errors::Error;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockBillingGateway {
        calls: Mutex<u32>,
    }

    #[async_trait]
    impl BillingGatewayTrait for MockBillingGateway {
        async fn create_checkout_session(
            &self,
            _request: CheckoutRequest,
        ) -> Result<CheckoutSession> {
            *self.calls.lock().unwrap() += 1;
            Ok(CheckoutSession {
                session_id: "cs_test_123".to_string(),
            })
        }

        async fn create_portal_session(&self, return_url: &str) -> Result<String> {
            *self.calls.lock().unwrap() += 1;
            Ok(format!("https://billing.example.com?return={}", return_url))
        }
    }

    #[tokio::test]
    async fn checkout_refused_without_publishable_key() {
        let gateway = Arc::new(MockBillingGateway::default());
        let service = BillingService::new(gateway.clone(), None);

        let result = service
            .start_checkout("price_123", CheckoutMode::Subscription, "s", "c")
            .await;

        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(*gateway.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn checkout_refused_for_placeholder_price_id() {
        let gateway = Arc::new(MockBillingGateway::default());
        let service = BillingService::new(gateway.clone(), Some("pk_test_abc".to_string()));

        let result = service
            .start_checkout("YOUR_MONTHLY_PRICE_ID", CheckoutMode::Subscription, "s", "c")
            .await;

        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(*gateway.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn checkout_returns_session_when_configured() {
        let gateway = Arc::new(MockBillingGateway::default());
        let service = BillingService::new(gateway.clone(), Some("pk_test_abc".to_string()));

        let session = service
            .start_checkout("price_123", CheckoutMode::Payment, "s", "c")
            .await
            .unwrap();

        assert_eq!(session.session_id, "cs_test_123");
        assert!(session.redirect_url().ends_with("cs_test_123"));
        assert_eq!(*gateway.calls.lock().unwrap(), 1);
    }

    #[test]
    fn plan_tiers_have_display_names() {
        assert_eq!(PlanTier::Free.display_name(), "Free Plan");
        assert_eq!(
            PlanTier::Pro.description(),
            "Unlimited power for ultimate productivity."
        );
    }
}
