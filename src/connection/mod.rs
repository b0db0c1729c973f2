pub mod dry_run;
pub mod http;

pub use dry_run::DryRunSender;
pub use http::HttpSender;

/// Hands a message to an external collaborator and returns its reply.
///
/// Implementations report their own failures through `R`; they never panic
/// on a failed delivery.
pub trait SendMessage<T, R> {
    fn send(&self, data: T) -> R;
}
