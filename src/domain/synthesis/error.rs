/// Errors from one outbound synthesis call.
///
/// A provider rejection (bad credential, unknown voice) is deliberately a
/// different variant from a transport failure so callers can tell a
/// misconfiguration apart from a flaky network.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("Transport failure calling the synthesis provider: {0}")]
    Transport(String),

    #[error("Provider rejected the request with status {status}: {body}")]
    ProviderRejected { status: u16, body: String },

    #[error("Provider response did not include a recognizable audio payload")]
    MalformedResponse,
}
