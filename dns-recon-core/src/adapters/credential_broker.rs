//! STS-backed credential broker

use async_trait::async_trait;
use dns_recon_aws::{AwsCredentials, StsClient, role_arn};

use crate::error::{CoreError, CoreResult};
use crate::traits::CredentialBroker;

/// Session label stamped on every assumed-role session.
const SESSION_NAME: &str = "CrossAccountSession";

/// Brokers per-account credentials through STS `AssumeRole`.
pub struct StsCredentialBroker {
    client: StsClient,
}

impl StsCredentialBroker {
    /// Wrap an STS client signed with the caller's base identity.
    #[must_use]
    pub fn new(client: StsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CredentialBroker for StsCredentialBroker {
    async fn assume_role(
        &self,
        account_id: &str,
        role_name: &str,
    ) -> CoreResult<AwsCredentials> {
        let arn = role_arn(account_id, role_name);
        match self.client.assume_role(&arn, SESSION_NAME).await {
            Ok(credentials) => {
                log::info!("Successfully assumed role in account {account_id}");
                Ok(credentials)
            }
            Err(source) => Err(CoreError::RoleAssumption {
                account_id: account_id.to_string(),
                source,
            }),
        }
    }
}
