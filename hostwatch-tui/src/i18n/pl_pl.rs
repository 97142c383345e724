//! 波兰语翻译 (pl-PL)

use super::keys::{
    ActionTexts, AlertDialogTexts, AlertsTexts, CommonTexts, ConfirmDeleteTexts, HelpActionTexts,
    HelpTexts, HintTexts, HostFormTexts, HostStatusTexts, HostsTexts, IpFormTexts,
    IpRegistryTexts, KeyNames, LanguageTexts, ModalTexts, NavTexts, SettingsTexts, ThemeTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "HostWatch Admin",
        add: "Dodaj",
        edit: "Edytuj",
        delete: "Usuń",
        cancel: "Anuluj",
        save: "Zapisz",
        confirm: "Potwierdź",
        close: "Zamknij",
        refresh: "Odśwież",
        quit: "Wyjdź",
        loading: "Ładowanie...",
        refreshing: "Odświeżanie...",
        submitting: "Wysyłanie...",
        error: "Błąd",
        none_selected: "Nic nie zaznaczono",
        back: "Wstecz",
        select: "Wybierz",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            tab_arrows: "Tab/↑↓",
        },
        actions: ActionTexts {
            navigate: "Nawigacja",
            switch_option: "Zmień",
            switch_panel: "Zmień panel",
            move_up_down: "Przesuń",
            status: "Status",
            logs: "Pobierz logi",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        hosts: "Hosty",
        ip_registry: "Rejestr IP",
        alerts: "Alerty",
        settings: "Ustawienia",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    hosts: HostsTexts {
        empty: "Brak zarejestrowanych hostów",
        created: "Dodano hosta",
        updated: "Zaktualizowano hosta",
        deleted: "Usunięto hosta",
        deleting: "Usuwanie hosta...",
        load_failed: "Nie udało się pobrać hostów",
        fetching_logs: "Pobieranie logów z",
        logs_alerts: "wygenerowanych alertów",
    },

    ip_registry: IpRegistryTexts {
        empty: "Rejestr IP jest pusty",
        created: "Dodano adres IP",
        updated: "Zaktualizowano wpis IP",
        deleted: "Usunięto wpis IP",
        deleting: "Usuwanie wpisu IP...",
        load_failed: "Nie udało się pobrać rejestru IP",
        never_seen: "-",
    },

    alerts: AlertsTexts {
        empty: "Brak alertów",
        load_failed: "Nie udało się pobrać alertów",
        unknown_host: "nieznany host",
    },

    settings: SettingsTexts {
        theme: ThemeTexts {
            label: "Motyw",
            dark: "Ciemny",
            light: "Jasny",
        },
        language: LanguageTexts { label: "Język" },
        saved: "Zapisano ustawienia",
        save_failed: "Nie udało się zapisać ustawień",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        host_form: HostFormTexts {
            add_title: "Dodaj hosta",
            edit_title: "Edytuj hosta",
            hostname: "Nazwa hosta",
            hostname_hint: "np. web-01",
            ip_address: "Adres IP",
            ip_address_hint: "np. 192.168.1.10",
            os_type: "System operacyjny",
            hostname_required: "Nazwa hosta jest wymagana",
            ip_required: "Adres IP jest wymagany",
        },
        ip_form: IpFormTexts {
            add_title: "Dodaj adres IP",
            edit_title: "Edytuj wpis IP",
            ip_address: "Adres IP",
            ip_address_hint: "np. 203.0.113.7",
            status: "Status",
            ip_required: "Adres IP jest wymagany",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Potwierdź usunięcie",
            message: "Czy na pewno chcesz usunąć",
            host: "hosta",
            ip: "wpis IP",
        },
        host_status: HostStatusTexts {
            title: "Status hosta",
            checking: "Sprawdzanie hosta...",
            free_ram: "Wolny RAM (MB)",
            disk_used: "Zajętość dysku",
            disk_total: "Rozmiar dysku",
            cpu_load: "Obciążenie CPU",
            uptime: "Czas działania",
        },
        alert: AlertDialogTexts {
            error_title: "Błąd",
            dismiss: "Naciśnij Enter lub Esc, aby zamknąć",
        },
        form_hints: "Tab Dalej | ←→ Zmień | Enter Zapisz | Esc Anuluj",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Pomoc",
        global: "Skróty globalne",
        operations: "Operacje na liście",
        actions: HelpActionTexts {
            switch_panel: "Zmień panel",
            move_up_down: "Góra/dół",
            confirm: "Otwórz / potwierdź",
            back: "Wstecz / anuluj",
            refresh: "Odśwież listę",
            quit: "Wyjdź",
            add: "Dodaj",
            edit: "Edytuj",
            delete: "Usuń",
            status: "Sprawdź status hosta",
            logs: "Pobierz logi hosta",
        },
        close_hint: "Naciśnij Esc, aby zamknąć pomoc",
    },
};
