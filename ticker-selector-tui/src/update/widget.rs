//! 后台请求结果处理
//!
//! 结果是否仍然有效由组件根据序号判断，这里只负责转交并同步界面状态。

use ticker_selector_core::services::WidgetEvent;
use ticker_selector_core::widget::ApplyOutcome;

use crate::model::{ApiStatus, App, BrowserColumn};

pub fn update(app: &mut App, event: WidgetEvent) {
    match event {
        WidgetEvent::SearchResolved { seq, query, result } => {
            let Some(selector) = app.selector.as_mut() else {
                return;
            };
            let outcome = selector.apply_results(seq, result);
            if outcome != ApplyOutcome::Stale {
                log::debug!("Search '{query}' → {outcome:?}");
                if let Some(cursor) = app.modal.search_cursor() {
                    *cursor = 0;
                }
            }
        }

        WidgetEvent::IndustriesResolved { seq, result } => {
            let Some(browser) = app.browser.as_mut() else {
                return;
            };
            if browser.apply_industries(seq, result) != ApplyOutcome::Stale {
                app.browser_view
                    .clamp(browser.industries().len(), browser.tickers().len());
                if browser.tickers().is_empty() {
                    app.browser_view.column = BrowserColumn::Industries;
                }
            }
        }

        WidgetEvent::IndustryTickersResolved {
            seq,
            industry_id,
            result,
        } => {
            let Some(browser) = app.browser.as_mut() else {
                return;
            };
            match browser.apply_tickers(seq, result) {
                ApplyOutcome::Stale => {}
                ApplyOutcome::Applied { count } => {
                    log::debug!("Industry {industry_id}: {count} ticker(s)");
                    app.browser_view.ticker_selected = 0;
                }
                ApplyOutcome::Failed => {
                    app.browser_view.ticker_selected = 0;
                    app.browser_view.column = BrowserColumn::Industries;
                }
            }
        }

        WidgetEvent::HealthChecked(result) => {
            app.api_status = match result {
                Ok(true) => ApiStatus::Online,
                Ok(false) => ApiStatus::Offline,
                Err(e) => {
                    log::warn!("Health check failed: {e}");
                    ApiStatus::Offline
                }
            };
        }
    }
}
