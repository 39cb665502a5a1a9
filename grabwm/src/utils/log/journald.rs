use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

/// Adds the journald layer, or leaves the subscriber alone when journald can't be reached.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = match tracing_journald::layer() {
        Ok(layer) => Some(layer),
        Err(err) => {
            eprintln!("Couldn't setup journald-logger, is journald running? {err}");
            None
        }
    };
    subscriber.with(layer)
}
