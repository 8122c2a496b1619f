//! Collaborator interfaces describing the web request being handled.
//!
//! The core never talks to a web framework directly; a host adapter
//! implements these traits and the request/user pipes read from them.

use crate::error::Error;

/// The route the framework matched for the current request.
#[derive(Debug, Clone, Default)]
pub struct RouteInfo {
    /// Route name; unnamed routes render as `(unnamed)`.
    pub name: Option<String>,
    pub middleware: Vec<String>,
    pub excluded_middleware: Vec<String>,
    /// Handler descriptor; closures typically render as `(closure)`.
    pub action: Option<String>,
}

/// The authenticated principal, when one is resolved.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Facts about the in-flight request. Only consulted for foreground
/// invocations — background/CLI reports skip the request pipes entirely.
pub trait RequestFacts: Send + Sync {
    fn method(&self) -> String;

    fn full_url(&self) -> String;

    fn referrer(&self) -> Option<String>;

    fn route(&self) -> Option<RouteInfo>;

    fn client_ip(&self) -> String;

    fn user_agent(&self) -> Option<String>;

    /// Resolving the principal may hit a session store or database and is
    /// therefore allowed to fail; the user pipe degrades to IP-only output
    /// and re-raises the failure so it lands in the internal-errors block.
    ///
    /// # Errors
    /// Whatever the host adapter's principal lookup reports.
    fn principal(&self) -> Result<Option<Principal>, Error>;
}

/// Whether the exception being rendered is travelling through an orderly
/// "report this" path, as opposed to escaping uncaught. Decides between the
/// `EXCEPTION (CAUGHT):` and `EXCEPTION (UNCAUGHT):` banners.
pub trait ReportingProbe: Send + Sync {
    fn is_reporting(&self) -> bool;
}
