//! Core of the site data editing tools.
//! Record model, document store, command services and console sessions for
//! the news and group member documents.

pub mod console;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use console::member_session::run_member_session;
pub use console::news_session::run_news_session;
pub use console::{Console, SessionError, SessionOutcome, INTERRUPT_NOTICE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::member::{Member, MemberDocument, Section};
pub use model::news::{Category, NewsDocument, NewsItem};
pub use repo::document_repo::{DocumentRepository, RepoError, RepoResult, YamlFileRepository};
pub use service::member_service::{MemberDraft, MemberEdit, MemberService};
pub use service::news_service::{NewsItemDraft, NewsItemEdit, NewsItemSummary, NewsService};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
