/// Client certificates are always requested, must be present, and must chain
/// to the policy trust bundle.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ClientAuthMode {
    RequireAndVerify,
}
