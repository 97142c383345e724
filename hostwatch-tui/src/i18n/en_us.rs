//! 英文翻译 (en-US)

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
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        cancel: "Cancel",
        save: "Save",
        confirm: "Confirm",
        close: "Close",
        refresh: "Refresh",
        quit: "Quit",
        loading: "Loading...",
        refreshing: "Refreshing...",
        submitting: "Sending...",
        error: "Error",
        none_selected: "Nothing selected",
        back: "Back",
        select: "Select",
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
            navigate: "Navigate",
            switch_option: "Switch",
            switch_panel: "Switch panel",
            move_up_down: "Move",
            status: "Status",
            logs: "Collect logs",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        hosts: "Hosts",
        ip_registry: "IP Registry",
        alerts: "Alerts",
        settings: "Settings",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    hosts: HostsTexts {
        empty: "No hosts registered",
        created: "Host added",
        updated: "Host updated",
        deleted: "Host deleted",
        deleting: "Deleting host...",
        load_failed: "Could not load hosts",
        fetching_logs: "Collecting logs from",
        logs_alerts: "alerts raised",
    },

    ip_registry: IpRegistryTexts {
        empty: "The IP registry is empty",
        created: "IP address added",
        updated: "IP entry updated",
        deleted: "IP entry deleted",
        deleting: "Deleting IP entry...",
        load_failed: "Could not load the IP registry",
        never_seen: "-",
    },

    alerts: AlertsTexts {
        empty: "No alerts",
        load_failed: "Could not load alerts",
        unknown_host: "unknown host",
    },

    settings: SettingsTexts {
        theme: ThemeTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        language: LanguageTexts { label: "Language" },
        saved: "Settings saved",
        save_failed: "Could not save settings",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        host_form: HostFormTexts {
            add_title: "Add Host",
            edit_title: "Edit Host",
            hostname: "Hostname",
            hostname_hint: "e.g. web-01",
            ip_address: "IP Address",
            ip_address_hint: "e.g. 192.168.1.10",
            os_type: "Operating System",
            hostname_required: "Hostname is required",
            ip_required: "IP address is required",
        },
        ip_form: IpFormTexts {
            add_title: "Add IP Address",
            edit_title: "Edit IP Entry",
            ip_address: "IP Address",
            ip_address_hint: "e.g. 203.0.113.7",
            status: "Status",
            ip_required: "IP address is required",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            message: "Are you sure you want to delete this",
            host: "host",
            ip: "IP entry",
        },
        host_status: HostStatusTexts {
            title: "Host Status",
            checking: "Checking host...",
            free_ram: "Free RAM (MB)",
            disk_used: "Disk used",
            disk_total: "Disk total",
            cpu_load: "CPU load",
            uptime: "Uptime",
        },
        alert: AlertDialogTexts {
            error_title: "Error",
            dismiss: "Press Enter or Esc to dismiss",
        },
        form_hints: "Tab Next | ←→ Switch | Enter Save | Esc Cancel",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global: "Global shortcuts",
        operations: "List operations",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move up/down",
            confirm: "Open / confirm",
            back: "Back / cancel",
            refresh: "Refresh list",
            quit: "Quit",
            add: "Add",
            edit: "Edit",
            delete: "Delete",
            status: "Check host status",
            logs: "Collect host logs",
        },
        close_hint: "Press Esc to close the help",
    },
};
