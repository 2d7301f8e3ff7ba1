//! Background execution of widget fetches

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use ticker_selector_provider::{Result as ApiResult, TickerApi};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::{CoreError, CoreResult};
use crate::types::{Industry, TickerCandidate};
use crate::widget::{ChildQueryTicket, QueryTicket};

/// Per-call timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a fetch, tagged with the sequence number it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    SearchResolved {
        seq: u64,
        query: String,
        result: CoreResult<Vec<TickerCandidate>>,
    },
    IndustriesResolved {
        seq: u64,
        result: CoreResult<Vec<Industry>>,
    },
    IndustryTickersResolved {
        seq: u64,
        industry_id: i64,
        result: CoreResult<Vec<TickerCandidate>>,
    },
    HealthChecked(CoreResult<bool>),
}

/// Runs tickets against a [`TickerApi`] on the current tokio runtime.
///
/// Results are delivered in completion order over the channel returned by
/// [`WidgetRuntime::new`]; the widgets sort out staleness. Dropping the
/// runtime aborts whatever is still in flight.
pub struct WidgetRuntime {
    api: Arc<dyn TickerApi>,
    timeout: Duration,
    events: mpsc::UnboundedSender<WidgetEvent>,
    tasks: JoinSet<()>,
}

impl WidgetRuntime {
    pub fn new(
        api: Arc<dyn TickerApi>,
        timeout: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<WidgetEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let runtime = Self {
            api,
            timeout,
            events,
            tasks: JoinSet::new(),
        };
        (runtime, rx)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of fetches not yet reaped
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    pub fn spawn_search(&mut self, ticket: QueryTicket) {
        let api = Arc::clone(&self.api);
        let QueryTicket { seq, query } = ticket;
        let operation = format!("search '{query}'");
        let q = query.clone();
        self.spawn(
            operation,
            async move { api.search_tickers(&q).await },
            move |result| WidgetEvent::SearchResolved { seq, query, result },
        );
    }

    pub fn spawn_industries(&mut self, seq: u64) {
        let api = Arc::clone(&self.api);
        self.spawn(
            "list industries".to_string(),
            async move { api.list_industries().await },
            move |result| WidgetEvent::IndustriesResolved { seq, result },
        );
    }

    pub fn spawn_industry_tickers(&mut self, ticket: ChildQueryTicket) {
        let api = Arc::clone(&self.api);
        let ChildQueryTicket { seq, industry_id } = ticket;
        self.spawn(
            format!("list tickers of industry {industry_id}"),
            async move { api.list_industry_tickers(industry_id).await },
            move |result| WidgetEvent::IndustryTickersResolved {
                seq,
                industry_id,
                result,
            },
        );
    }

    pub fn spawn_health_check(&mut self) {
        let api = Arc::clone(&self.api);
        self.spawn(
            "health check".to_string(),
            async move { api.health_check().await },
            WidgetEvent::HealthChecked,
        );
    }

    /// Abort every in-flight fetch. No further events are sent for them.
    pub fn shutdown(&mut self) {
        if !self.tasks.is_empty() {
            log::debug!("Aborting {} in-flight fetch(es)", self.tasks.len());
        }
        self.tasks.abort_all();
    }

    fn spawn<T, F, W>(&mut self, operation: String, fut: F, wrap: W)
    where
        T: Send + 'static,
        F: Future<Output = ApiResult<T>> + Send + 'static,
        W: FnOnce(CoreResult<T>) -> WidgetEvent + Send + 'static,
    {
        self.reap();

        let timeout = self.timeout;
        let events = self.events.clone();
        log::debug!("Spawning {operation}");
        self.tasks.spawn(async move {
            let result = with_timeout(&operation, timeout, fut).await;
            if events.send(wrap(result)).is_err() {
                log::debug!("Event receiver gone, dropping result of {operation}");
            }
        });
    }

    fn reap(&mut self) {
        while let Some(joined) = self.tasks.try_join_next() {
            if let Err(e) = joined {
                if e.is_panic() {
                    log::error!("Fetch task panicked: {e}");
                }
            }
        }
    }
}

impl Drop for WidgetRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn with_timeout<T>(
    operation: &str,
    timeout: Duration,
    fut: impl Future<Output = ApiResult<T>>,
) -> CoreResult<T> {
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(CoreError::from),
        Err(_) => Err(CoreError::Timeout {
            operation: operation.to_string(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{toyota, MockTickerApi};
    use crate::traits::{InMemoryFields, TargetFields};
    use crate::types::Trigger;
    use crate::widget::{
        ApplyOutcome, IndustryBrowser, QueryAction, SelectorOptions, TickerSelector,
    };

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn fetch(action: QueryAction) -> QueryTicket {
        match action {
            QueryAction::Fetch(t) => t,
            QueryAction::Cleared => panic!("expected a fetch"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_order_search_keeps_latest_query() {
        let api = Arc::new(
            MockTickerApi::new()
                .with_search(
                    "7",
                    ms(300),
                    Ok(vec![toyota(), TickerCandidate::new("7974", "Nintendo")]),
                )
                .with_search("70", ms(50), Ok(vec![toyota()])),
        );
        let (mut runtime, mut rx) =
            WidgetRuntime::new(Arc::clone(&api) as Arc<dyn TickerApi>, DEFAULT_TIMEOUT);
        let mut fields = InMemoryFields::new().with_field("ticker1");
        let mut selector = TickerSelector::new(SelectorOptions::default());
        selector.bind_trigger(&Trigger::new("b1", "#ticker1"), &fields);

        runtime.spawn_search(fetch(selector.on_query_change("7")));
        runtime.spawn_search(fetch(selector.on_query_change("70")));

        let mut outcomes = Vec::new();
        for _ in 0..2 {
            match rx.recv().await {
                Some(WidgetEvent::SearchResolved { seq, result, .. }) => {
                    outcomes.push(selector.apply_results(seq, result));
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }

        assert_eq!(outcomes, vec![ApplyOutcome::Applied { count: 1 }, ApplyOutcome::Stale]);
        assert_eq!(api.calls().await, vec!["search:7", "search:70"]);
        assert_eq!(selector.candidates(), [toyota()].as_slice());

        assert!(selector.activate_index(0, &mut fields).is_written());
        assert_eq!(fields.value("ticker1"), Some("7203"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_call_times_out() {
        let api = MockTickerApi::new().with_search("705", Duration::from_secs(30), Ok(vec![toyota()]));
        let (mut runtime, mut rx) = WidgetRuntime::new(Arc::new(api), DEFAULT_TIMEOUT);

        runtime.spawn_search(QueryTicket {
            seq: 1,
            query: "705".to_string(),
        });

        match rx.recv().await {
            Some(WidgetEvent::SearchResolved { seq: 1, result, .. }) => {
                assert_eq!(
                    result,
                    Err(CoreError::Timeout {
                        operation: "search '705'".to_string(),
                        timeout_ms: 5000,
                    })
                );
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn industry_reselect_renders_latest_child_list() {
        let api = MockTickerApi::new()
            .with_industries(vec![Industry::new(5, "Transportation Equipment"), Industry::new(6, "Banks")])
            .with_industry_tickers(6, ms(200), vec![TickerCandidate::new("8306", "MUFG")])
            .with_industry_tickers(5, ms(10), vec![toyota()]);
        let (mut runtime, mut rx) = WidgetRuntime::new(Arc::new(api), DEFAULT_TIMEOUT);
        let mut browser = IndustryBrowser::new();

        runtime.spawn_industries(browser.begin_load_industries());
        match rx.recv().await {
            Some(WidgetEvent::IndustriesResolved { seq, result }) => {
                assert_eq!(browser.apply_industries(seq, result), ApplyOutcome::Applied { count: 2 });
            }
            other => panic!("unexpected event: {other:?}"),
        }

        runtime.spawn_industry_tickers(browser.activate_industry(6));
        runtime.spawn_industry_tickers(browser.activate_industry(5));

        for _ in 0..2 {
            match rx.recv().await {
                Some(WidgetEvent::IndustryTickersResolved { seq, result, .. }) => {
                    browser.apply_tickers(seq, result);
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }

        assert_eq!(browser.tickers(), [toyota()].as_slice());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_aborts_in_flight_fetches() {
        let api = Arc::new(MockTickerApi::new().with_health_delay(Duration::from_secs(1)));
        let (mut runtime, mut rx) = WidgetRuntime::new(Arc::clone(&api) as Arc<dyn TickerApi>, DEFAULT_TIMEOUT);

        runtime.spawn_health_check();
        assert_eq!(runtime.in_flight(), 1);
        runtime.shutdown();
        drop(runtime);

        // sender dropped with the runtime, nothing was delivered
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn health_check_reports_online() {
        let (mut runtime, mut rx) = WidgetRuntime::new(Arc::new(MockTickerApi::new()), DEFAULT_TIMEOUT);
        runtime.spawn_health_check();
        assert_eq!(rx.recv().await, Some(WidgetEvent::HealthChecked(Ok(true))));
    }
}
