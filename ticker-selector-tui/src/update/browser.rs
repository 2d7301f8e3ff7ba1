//! 行业浏览面板消息处理

use ticker_selector_core::widget::Selection;

use crate::i18n::t;
use crate::message::{BrowserMessage, Command};
use crate::model::{App, BrowserColumn};

pub fn update(app: &mut App, msg: BrowserMessage) -> Vec<Command> {
    let Some(browser) = app.browser.as_mut() else {
        return Vec::new();
    };

    match msg {
        BrowserMessage::SelectPrevious => app.browser_view.select_previous(),
        BrowserMessage::SelectNext => app
            .browser_view
            .select_next(browser.industries().len(), browser.tickers().len()),
        BrowserMessage::FocusIndustries => app.browser_view.column = BrowserColumn::Industries,
        BrowserMessage::FocusTickers => {
            if !browser.tickers().is_empty() {
                app.browser_view.column = BrowserColumn::Tickers;
            }
        }
        BrowserMessage::Confirm => match app.browser_view.column {
            BrowserColumn::Industries => {
                let selected = app.browser_view.industry_selected;
                let Some(industry_id) = browser.industries().get(selected).map(|i| i.id) else {
                    return Vec::new();
                };
                let ticket = browser.activate_industry(industry_id);
                app.browser_view.ticker_selected = 0;
                return vec![Command::LoadIndustryTickers(ticket)];
            }
            BrowserColumn::Tickers => {
                let index = app.browser_view.ticker_selected;
                if let Selection::Written { target, code, .. } =
                    browser.activate_ticker_index(index, &mut app.fields)
                {
                    app.set_status(format!("{}: {code} → {target}", t().status_bar.selected));
                }
            }
        },
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticker_selector_core::services::WidgetEvent;
    use ticker_selector_core::types::{Industry, TickerCandidate};
    use ticker_selector_core::widget::ChildQueryTicket;
    use ticker_selector_core::TargetFields;

    use crate::backend::AppConfig;
    use crate::message::AppMessage;
    use crate::update::update as dispatch;

    fn app_with_industries() -> App {
        let mut app = App::new(AppConfig::default());
        let _ = app.startup_commands();
        dispatch(
            &mut app,
            AppMessage::Widget(WidgetEvent::IndustriesResolved {
                seq: 1,
                result: Ok(vec![
                    Industry::new(5, "Transportation Equipment"),
                    Industry::new(6, "Banks"),
                ]),
            }),
        );
        app
    }

    #[test]
    fn confirming_industry_requests_its_tickers() {
        let mut app = app_with_industries();
        dispatch(&mut app, AppMessage::Browser(BrowserMessage::SelectNext));

        let commands = dispatch(&mut app, AppMessage::Browser(BrowserMessage::Confirm));

        assert_eq!(
            commands,
            vec![Command::LoadIndustryTickers(ChildQueryTicket {
                seq: 1,
                industry_id: 6
            })]
        );
    }

    #[test]
    fn confirming_ticker_writes_ticker_code() {
        let mut app = app_with_industries();
        dispatch(&mut app, AppMessage::Browser(BrowserMessage::Confirm));
        dispatch(
            &mut app,
            AppMessage::Widget(WidgetEvent::IndustryTickersResolved {
                seq: 1,
                industry_id: 5,
                result: Ok(vec![
                    TickerCandidate::new("7203", "Toyota"),
                    TickerCandidate::new("7267", "Honda"),
                ]),
            }),
        );

        dispatch(&mut app, AppMessage::Browser(BrowserMessage::FocusTickers));
        dispatch(&mut app, AppMessage::Browser(BrowserMessage::SelectNext));
        dispatch(&mut app, AppMessage::Browser(BrowserMessage::Confirm));

        assert_eq!(app.fields.value("ticker-code"), Some("7267"));
        assert_eq!(app.fields.value("ticker1"), Some(""));
    }

    #[test]
    fn ticker_column_needs_tickers() {
        let mut app = app_with_industries();
        dispatch(&mut app, AppMessage::Browser(BrowserMessage::FocusTickers));
        assert_eq!(app.browser_view.column, BrowserColumn::Industries);
    }
}
