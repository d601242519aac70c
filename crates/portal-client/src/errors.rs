// crates/portal-client/src/errors.rs

use thiserror::Error;

/// Failures on the order submission path.
///
/// Transport problems and business rejections travel the same
/// notification channel, so their display messages must stay
/// distinguishable: rejections carry the server's wording verbatim,
/// transport failures are prefixed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Order submission failed: {0}")]
    Transport(String),

    #[error("{0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_rejection_messages_differ() {
        let transport = ClientError::Transport("connection refused".to_string());
        let rejected = ClientError::Rejected("Insufficient funds".to_string());
        assert_eq!(
            transport.to_string(),
            "Order submission failed: connection refused"
        );
        assert_eq!(rejected.to_string(), "Insufficient funds");
    }
}
