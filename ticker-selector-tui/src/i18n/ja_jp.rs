//! 日文翻译 (ja-JP)

use super::keys::{
    BrowserTexts, CommonTexts, FormTexts, HelpTexts, HintTexts, SearchTexts, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "銘柄セレクター",
        loading: "読み込み中...",
        error: "エラー",
        no_data: "データなし",
    },

    hints: HintTexts {
        switch_panel: "パネル切替",
        select: "選択",
        open_search: "検索",
        pick: "決定",
        switch_list: "リスト切替",
        close: "閉じる",
        help: "ヘルプ",
        quit: "終了",
    },

    form: FormTexts {
        title: "銘柄",
        search_button: "[検索]",
        empty_value: "(未入力)",
        no_triggers: "このページには検索ボタンがありません",
    },

    browser: BrowserTexts {
        title: "業種から選ぶ",
        industries: "業種",
        tickers: "銘柄",
        target_label: "入力先",
        choose_industry: "業種を選択してください",
        disabled: "このページでは業種ブラウザを利用できません",
    },

    search: SearchTexts {
        title: "銘柄検索",
        placeholder: "銘柄コードまたは会社名",
        no_results: "該当する銘柄がありません",
        bound_to: "入力先",
        inert_binding: "入力先が見つからないため選択は反映されません",
    },

    status_bar: StatusBarTexts {
        api_online: "API 接続中",
        api_offline: "API 未接続",
        api_checking: "API 確認中",
        selected: "選択しました",
        refreshing: "再読み込み中...",
        language_changed: "言語: 日本語",
        theme_changed: "テーマを変更しました",
        save_failed: "設定の保存に失敗しました",
        search_disabled: "このページでは検索を利用できません",
    },

    help: HelpTexts {
        title: "ヘルプ",
        global: "共通ショートカット",
        search: "検索ウィンドウ",
        close_hint: "Esc でヘルプを閉じる",
        switch_panel: "パネル切替",
        move_selection: "上下に移動",
        confirm: "検索を開く / 決定",
        refresh: "業種を再読み込み",
        language: "言語切替",
        theme: "テーマ切替",
        type_query: "入力して検索",
        clear_input: "入力をクリア",
        cancel: "選択せずに閉じる",
        quit: "終了",
    },
};
