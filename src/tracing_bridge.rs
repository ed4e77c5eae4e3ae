//! src/tracing_bridge.rs
//! Bridge between the tracing crate and the stylized printer.
//!
//! This module lets code instrumented with standard tracing macros reuse the
//! printer's style prefixes and sink: a [`StyleLayer`] forwards each tracing
//! event's `message` field through the printer, with the event's metadata
//! standing in for the call site. The configured [`Style`] keeps its usual
//! meaning — `NoOp` drops events, `FileLine` prefixes the event's source
//! position, `Func` prefixes the event's target.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stylog::{Style, tracing_bridge};
//!
//! tracing_bridge::init_tracing(Style::FileLine);
//!
//! tracing::info!("cache refreshed");
//! ```

use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::caller::CallSite;
use crate::render;
use crate::style::Style;

/// A tracing layer that routes events through the stylized printer.
pub struct StyleLayer {
    style: Style,
}

impl StyleLayer {
    /// Creates a layer that renders events with the given style.
    #[must_use]
    pub const fn new(style: Style) -> Self {
        Self { style }
    }
}

impl<S> Layer<S> for StyleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if self.style.is_no_op() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        // Event metadata stands in for the macro-captured call site. File and
        // line may be absent on foreign events; the placeholder keeps the
        // prefix shape intact rather than dropping the line.
        let metadata = event.metadata();
        let site = CallSite::from_parts(
            metadata.file().unwrap_or("<unknown>"),
            metadata.line().unwrap_or(0),
            metadata.target(),
        );
        render::__log_values(self.style, &site, &[&message]);
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`StyleLayer`] as the global tracing subscriber.
///
/// Degrades silently when a global default is already installed, matching
/// the printer's rule that diagnostics must never fail the host program.
pub fn init_tracing(style: Style) {
    use tracing_subscriber::layer::SubscriberExt;

    let subscriber = tracing_subscriber::registry().with(StyleLayer::new(style));
    let _ = tracing::subscriber::set_global_default(subscriber);
}
