// Résumé screening: PDF text → skills/organizations → fraud score → GitHub cross-check.
// Stages are plain functions or small traits; handlers only wire them to HTTP.

pub mod entities;
pub mod extractor;
pub mod handlers;
pub mod miner;
pub mod pipeline;
pub mod scorer;
pub mod verifier;
