use serde::{Deserialize, Serialize};

/// Keystore passphrase. Never printed by `Debug` or `Display`.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Passphrase(pub(crate) String);
