//! 英文翻译 (en-US)

use super::keys::{
    BrowserTexts, CommonTexts, FormTexts, HelpTexts, HintTexts, SearchTexts, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Ticker Selector",
        loading: "Loading...",
        error: "Error",
        no_data: "No data",
    },

    hints: HintTexts {
        switch_panel: "Switch Panels",
        select: "Select",
        open_search: "Search",
        pick: "Pick",
        switch_list: "Switch List",
        close: "Close",
        help: "Help",
        quit: "Quit",
    },

    form: FormTexts {
        title: "Tickers",
        search_button: "[Search]",
        empty_value: "(empty)",
        no_triggers: "No search buttons on this page",
    },

    browser: BrowserTexts {
        title: "Browse by Industry",
        industries: "Industries",
        tickers: "Tickers",
        target_label: "Writes into",
        choose_industry: "Choose an industry",
        disabled: "Industry browser is not available on this page",
    },

    search: SearchTexts {
        title: "Search Ticker",
        placeholder: "Ticker code or company name",
        no_results: "No matching tickers",
        bound_to: "Target",
        inert_binding: "target field not found, selection does nothing",
    },

    status_bar: StatusBarTexts {
        api_online: "API online",
        api_offline: "API offline",
        api_checking: "API ...",
        selected: "Selected",
        refreshing: "Refreshing...",
        language_changed: "Language: English",
        theme_changed: "Theme changed",
        save_failed: "Failed to save settings",
        search_disabled: "Search is not available on this page",
    },

    help: HelpTexts {
        title: "Help",
        global: "Global shortcuts",
        search: "Search window",
        close_hint: "Press Esc to close the help",
        switch_panel: "Switch panel",
        move_selection: "Move Up/Down",
        confirm: "Open search / Pick",
        refresh: "Reload industries",
        language: "Switch language",
        theme: "Switch theme",
        type_query: "Type to search",
        clear_input: "Clear the query",
        cancel: "Close without picking",
        quit: "Quit",
    },
};
