pub mod cipher_models;
pub mod icon_models;
pub mod proxy_models;
pub mod vocab_models;

pub use cipher_models::{CipherError, EncryptSummary};
pub use icon_models::{IconError, IconLayout};
pub use proxy_models::{ForwardHeaders, ProxyError};
pub use vocab_models::{MergeReport, VocabError, VocabRecord};
