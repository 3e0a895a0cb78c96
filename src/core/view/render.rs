// ─── Renderers ───
// Pure functions from view state to view descriptions. No host calls, no
// mutation; every user-facing string goes through the localizer.

use chrono::DateTime;

use super::model::*;
use crate::core::content::ContentKind;
use crate::core::dialog::DialogKind;
use crate::core::host::{ContentHit, InstalledItem, ModpackHit, ModpackVersion};
use crate::core::i18n::{Localizer, LANGUAGE_GROUPS};
use crate::core::instance::LoaderKind;
use crate::core::search::{SearchPhase, SearchSession};
use crate::core::state::{ActionState, ListState, ModalId, Screen, ViewState};

const UNKNOWN_PACK_ICON: &str = "https://cdn.modrinth.com/assets/unknown_pack.png";

// ── Instances ───────────────────────────────────────────

fn loader_icon(loader: &str) -> Icon {
    match LoaderKind::parse(loader) {
        Some(LoaderKind::Fabric) => Icon::Scroll,
        Some(LoaderKind::Forge) | Some(LoaderKind::NeoForge) => Icon::Hammer,
        _ => Icon::Cube,
    }
}

/// Instance sidebar. At most one entry is active: the first one matching the
/// current instance.
pub fn render_instances(state: &ViewState) -> Vec<InstanceEntryView> {
    let active = state.active_instance_index();
    state
        .instances
        .iter()
        .enumerate()
        .map(|(index, inst)| InstanceEntryView {
            name: inst.name.clone(),
            subtitle: format!("{} {}", inst.loader, inst.version),
            icon: loader_icon(&inst.loader),
            active: active == Some(index),
        })
        .collect()
}

pub fn render_screen(state: &ViewState) -> ScreenView {
    match (state.screen, &state.current_instance) {
        (Screen::InstanceDetail, Some(inst)) => ScreenView::Instance {
            name: inst.name.clone(),
            version: inst.version.clone(),
            loader: inst.loader.clone(),
            tab: state.instance_tab,
        },
        _ => ScreenView::Home,
    }
}

// ── Accounts ────────────────────────────────────────────

pub fn render_accounts(state: &ViewState) -> AccountsView {
    let l = &state.localizer;
    let current_uuid = state.current_account.as_ref().map(|a| a.uuid.as_str());

    let header = match &state.current_account {
        Some(acc) => AccountHeaderView {
            name: acc.username.clone(),
            subtitle: acc.kind.to_uppercase(),
            avatar: acc
                .username
                .chars()
                .next()
                .map(|c| Avatar::Initial(c.to_uppercase().next().unwrap_or(c)))
                .unwrap_or(Avatar::Icon(Icon::User)),
        },
        None => AccountHeaderView {
            name: l.t("no_account"),
            subtitle: l.t("select_or_add"),
            avatar: Avatar::Icon(Icon::UserSlash),
        },
    };

    let entries = state
        .accounts
        .iter()
        .map(|acc| AccountEntryView {
            uuid: acc.uuid.clone(),
            username: acc.username.clone(),
            kind_label: acc.kind.to_uppercase(),
            active: current_uuid == Some(acc.uuid.as_str()),
        })
        .collect::<Vec<_>>();

    AccountsView {
        header,
        empty_text: entries.is_empty().then(|| l.t("no_accounts_yet")),
        entries,
        auth_tab: state.auth_tab,
    }
}

// ── Language picker ─────────────────────────────────────

/// Fixed group and entry order; exactly one entry is active (the current
/// language, or the first language when the code isn't in the table).
pub fn render_language_picker(localizer: &Localizer) -> LanguagePickerView {
    let current = localizer.current_entry();

    let groups = LANGUAGE_GROUPS
        .iter()
        .map(|group| LanguageGroupView {
            title: group.title.to_string(),
            entries: group
                .languages
                .iter()
                .map(|lang| LanguageEntryView {
                    code: lang.code.to_string(),
                    flag: lang.flag.to_string(),
                    name: lang.name.to_string(),
                    active: lang.code == current.code,
                })
                .collect(),
        })
        .collect();

    LanguagePickerView {
        current_flag: current.flag.to_string(),
        current_name: current.name.to_string(),
        groups,
    }
}

// ── Pickers ─────────────────────────────────────────────

pub fn render_version_picker(state: &ViewState) -> PickerView {
    let selected = state.create_form.version.as_deref();
    PickerView {
        button_text: selected.map(str::to_string),
        entries: state
            .filtered_versions()
            .into_iter()
            .map(|v| PickerEntryView {
                value: v.to_string(),
                label: v.to_string(),
                selected: selected == Some(v),
            })
            .collect(),
    }
}

pub fn render_loader_picker(state: &ViewState) -> PickerView {
    let selected = state.create_form.loader;
    PickerView {
        button_text: Some(selected.to_string()),
        entries: LoaderKind::ALL
            .into_iter()
            .map(|loader| PickerEntryView {
                value: loader.to_string(),
                label: loader.to_string(),
                selected: loader == selected,
            })
            .collect(),
    }
}

/// "All versions" followed by every known version.
pub fn render_modpack_filter(state: &ViewState) -> PickerView {
    let all_label = state.localizer.t("all_versions");
    let selected = state.modpack_filter.as_deref();

    let mut entries = vec![PickerEntryView {
        value: String::new(),
        label: all_label.clone(),
        selected: selected.is_none(),
    }];
    entries.extend(state.versions.iter().map(|v| PickerEntryView {
        value: v.clone(),
        label: v.clone(),
        selected: selected == Some(v.as_str()),
    }));

    PickerView {
        button_text: Some(selected.map(str::to_string).unwrap_or(all_label)),
        entries,
    }
}

// ── Search results ──────────────────────────────────────

fn load_more_view<T>(session: &SearchSession<T>, l: &Localizer) -> Option<LoadMoreView> {
    match session.phase() {
        SearchPhase::LoadingMore => Some(LoadMoreView {
            label: l.t("loading"),
            busy: true,
        }),
        _ if session.can_load_more() => Some(LoadMoreView {
            label: l.t("load_more"),
            busy: false,
        }),
        _ => None,
    }
}

fn rows_view<T, R>(
    session: &SearchSession<T>,
    l: &Localizer,
    row: impl Fn(&T) -> R,
) -> ResultsView<R> {
    ResultsView::Rows {
        rows: session.results().iter().map(row).collect(),
        load_more: load_more_view(session, l),
    }
}

fn modpack_row(hit: &ModpackHit, l: &Localizer) -> ModpackRowView {
    ModpackRowView {
        project_id: hit.project_id.clone(),
        title: hit.title.clone(),
        author: hit.author.clone(),
        icon_url: hit
            .icon_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| UNKNOWN_PACK_ICON.to_string()),
        action: ActionView {
            label: l.t("install"),
            icon: Icon::Download,
            state: ActionState::Idle,
            enabled: true,
        },
    }
}

pub fn render_modpack_results(state: &ViewState) -> ResultsView<ModpackRowView> {
    let l = &state.localizer;
    let session = &state.modpack_search;
    match session.phase() {
        SearchPhase::Idle => ResultsView::Idle,
        SearchPhase::Loading => ResultsView::Loading { message: None },
        SearchPhase::Empty => ResultsView::Empty {
            message: l.t("no_modpacks_found"),
        },
        SearchPhase::Failed(_) => ResultsView::Error {
            message: l.t("error_searching"),
        },
        SearchPhase::Ready | SearchPhase::LoadingMore => {
            rows_view(session, l, |hit| modpack_row(hit, l))
        }
    }
}

/// Row action for an install button.
pub fn install_action(state: ActionState, l: &Localizer) -> ActionView {
    let (key, icon) = match state {
        ActionState::Idle => ("install", Icon::Download),
        ActionState::Busy => ("installing", Icon::Spinner),
        ActionState::Done => ("installed", Icon::Check),
    };
    ActionView {
        label: l.t(key),
        icon,
        state,
        enabled: state == ActionState::Idle,
    }
}

pub fn render_content_row(state: &ViewState, hit: &ContentHit) -> ContentRowView {
    let action = state
        .install_actions
        .get(&hit.project_id)
        .copied()
        .unwrap_or_default();
    ContentRowView {
        project_id: hit.project_id.clone(),
        title: hit.title.clone(),
        description: hit.description.clone(),
        icon_url: hit.icon_url.clone(),
        action: install_action(action, &state.localizer),
    }
}

pub fn render_content_results(state: &ViewState) -> ResultsView<ContentRowView> {
    let l = &state.localizer;
    let session = &state.content_search;
    let query = session.query();

    match session.phase() {
        SearchPhase::Idle => ResultsView::Idle,
        SearchPhase::Loading => ResultsView::Loading {
            message: query.is_empty().then(|| l.t("loading_popular")),
        },
        SearchPhase::Empty => ResultsView::Empty {
            message: if query.is_empty() {
                l.t("no_compatible_items")
            } else {
                l.translate("no_results_for", &[("query", query)])
            },
        },
        SearchPhase::Failed(error) => ResultsView::Error {
            message: l.translate("search_items_error", &[("error", error.as_str())]),
        },
        SearchPhase::Ready | SearchPhase::LoadingMore => {
            rows_view(session, l, |hit| render_content_row(state, hit))
        }
    }
}

pub fn render_item_browser(state: &ViewState) -> ItemBrowserView {
    let session = &state.content_search;
    ItemBrowserView {
        kind: state.content_kind,
        title: state.localizer.t(state.content_kind.browser_title_key()),
        query: state.content_query.clone(),
        searching: session.phase() == &SearchPhase::Loading && !session.query().is_empty(),
        results: render_content_results(state),
    }
}

// ── Modpack versions ────────────────────────────────────

fn published_date(raw: Option<&str>, l: &Localizer) -> String {
    raw.and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| l.t("unknown_date"))
}

fn modpack_version_row(version: &ModpackVersion, l: &Localizer) -> ModpackVersionRowView {
    ModpackVersionRowView {
        id: version.id.clone(),
        name: version
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| l.t("unnamed")),
        details: format!(
            "{} • {}",
            version.game_versions.join(", "),
            version.loaders.join(", ")
        ),
        published: published_date(version.date_published.as_deref(), l),
    }
}

pub fn render_modpack_versions(state: &ViewState) -> ListView<ModpackVersionRowView> {
    let l = &state.localizer;
    match &state.modpack_versions {
        ListState::NotLoaded => ListView::Hidden,
        ListState::Loading => ListView::Loading {
            message: l.t("loading_versions"),
        },
        ListState::Empty => ListView::Empty {
            message: l.t("no_versions_found"),
        },
        ListState::Failed(error) => ListView::Error {
            message: l.translate("versions_error", &[("error", error.as_str())]),
        },
        ListState::Loaded(versions) => ListView::Items {
            rows: versions.iter().map(|v| modpack_version_row(v, l)).collect(),
        },
    }
}

// ── Installed items ─────────────────────────────────────

fn installed_item_row(item: &InstalledItem, kind: ContentKind, l: &Localizer) -> InstalledItemView {
    let name = item.name.as_deref().filter(|n| !n.is_empty());
    InstalledItemView {
        file_name: item.file_name.clone(),
        display_name: name.unwrap_or(&item.file_name).to_string(),
        sub_text: match (name, kind) {
            (Some(_), _) => item.file_name.clone(),
            (None, ContentKind::Mod) => l.t("mod_file"),
            (None, _) => l.t("file"),
        },
        icon: Icon::for_content(kind),
    }
}

pub fn render_installed_items(state: &ViewState, kind: ContentKind) -> InstalledItemsView {
    let l = &state.localizer;
    let kind_param = [("kind", kind.as_str())];
    match state.installed_items(kind) {
        ListState::NotLoaded => InstalledItemsView::Hidden,
        ListState::Loading => InstalledItemsView::Loading {
            message: l.translate("loading_items", &kind_param),
        },
        ListState::Empty => InstalledItemsView::Empty {
            message: l.t(kind.empty_key()),
            add_label: l.translate("add_item", &kind_param),
            kind,
        },
        ListState::Failed(error) => InstalledItemsView::Error {
            title: l.t("failed_to_load_items"),
            detail: error.clone(),
            retry_label: l.t("try_again"),
        },
        ListState::Loaded(items) => InstalledItemsView::Items {
            rows: items
                .iter()
                .map(|item| installed_item_row(item, kind, l))
                .collect(),
        },
    }
}

// ── Chrome ──────────────────────────────────────────────

pub fn render_status(state: &ViewState) -> StatusView {
    let status = &state.status;
    StatusView {
        text: state.localizer.t(&status.key),
        progress: status.loading.then(|| ProgressView {
            percent: status.progress,
            label: format!("{}%", status.progress),
        }),
        launch_enabled: status.launch_enabled,
    }
}

fn dialog_kind(modal: ModalId) -> Option<DialogKind> {
    match modal {
        ModalId::Alert => Some(DialogKind::Alert),
        ModalId::Confirm => Some(DialogKind::Confirm),
        ModalId::Prompt => Some(DialogKind::Prompt),
        _ => None,
    }
}

pub fn render_overlay(state: &ViewState) -> OverlayView {
    let modal = state.open_modal;
    let dialog = modal
        .and_then(dialog_kind)
        .and_then(|kind| state.dialogs.content().filter(|c| c.kind == kind).cloned());
    let delete_message = match (modal, &state.pending_delete) {
        (Some(ModalId::DeleteItem), Some(pending)) => Some(
            state
                .localizer
                .translate("delete_mod_confirm", &[("name", pending.file_name.as_str())]),
        ),
        _ => None,
    };

    OverlayView {
        visible: modal.is_some(),
        modal,
        dialog,
        delete_message,
    }
}

pub fn render_create_modal(state: &ViewState) -> CreateModalView {
    CreateModalView {
        tab: state.create_tab,
        import_visible: state.import_form.visible,
        name: state.create_form.name.clone(),
        version: render_version_picker(state),
        loader: render_loader_picker(state),
        modpack_filter: render_modpack_filter(state),
        modpacks: render_modpack_results(state),
        import_name: state.import_form.name.clone(),
        import_path: state.import_form.file_path.clone(),
    }
}

pub fn render_app(state: &ViewState, version_label: &str) -> AppView {
    AppView {
        version_label: version_label.to_string(),
        screen: render_screen(state),
        instances: render_instances(state),
        accounts: render_accounts(state),
        language_picker: render_language_picker(&state.localizer),
        open_dropdown: state.open_dropdown,
        overlay: render_overlay(state),
        status: render_status(state),
        console: state.console.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::Account;
    use crate::core::i18n::{Bundle, ResourceBundles};
    use crate::core::instance::InstanceSummary;

    fn state() -> ViewState {
        let localizer = Localizer::new(ResourceBundles::builtin().unwrap(), "en");
        ViewState::new(localizer, 20)
    }

    fn hits(n: usize) -> Vec<ContentHit> {
        (0..n)
            .map(|i| ContentHit {
                project_id: format!("p{i}"),
                title: format!("Mod {i}"),
                description: String::new(),
                icon_url: None,
            })
            .collect()
    }

    #[test]
    fn instance_icons_follow_loader() {
        let mut s = state();
        s.instances = vec![
            InstanceSummary::new("a", "1.20.1", LoaderKind::Fabric),
            InstanceSummary::new("b", "1.20.1", LoaderKind::NeoForge),
            InstanceSummary::new("c", "1.20.1", LoaderKind::Vanilla),
        ];
        s.select_instance(s.instances[1].clone());

        let rows = render_instances(&s);
        assert_eq!(rows[0].icon, Icon::Scroll);
        assert_eq!(rows[1].icon, Icon::Hammer);
        assert_eq!(rows[2].icon, Icon::Cube);
        assert_eq!(rows[0].subtitle, "Fabric 1.20.1");
        assert_eq!(rows.iter().filter(|r| r.active).count(), 1);
        assert!(rows[1].active);
    }

    #[test]
    fn no_account_header_placeholder() {
        let mut s = state();
        let view = render_accounts(&s);
        assert_eq!(view.header.name, "No Account");
        assert_eq!(view.header.avatar, Avatar::Icon(Icon::UserSlash));
        assert_eq!(view.empty_text.as_deref(), Some("No accounts added yet."));

        let acc = Account {
            uuid: "u".into(),
            username: "alex".into(),
            kind: "elyby".into(),
        };
        s.set_accounts(vec![acc.clone()], Some(acc));
        let view = render_accounts(&s);
        assert_eq!(view.header.avatar, Avatar::Initial('A'));
        assert_eq!(view.header.subtitle, "ELYBY");
        assert!(view.entries[0].active);
        assert!(view.empty_text.is_none());
    }

    #[test]
    fn language_picker_marks_exactly_one_entry() {
        let mut bundles = ResourceBundles::builtin().unwrap();
        bundles.insert("pl", Bundle::default());
        bundles.insert("zz", Bundle::default());
        let mut l = Localizer::new(bundles, "en");

        for code in ["pl", "zz"] {
            assert!(l.set_language(code));
            let view = render_language_picker(&l);
            let active: Vec<_> = view
                .groups
                .iter()
                .flat_map(|g| g.entries.iter())
                .filter(|e| e.active)
                .collect();
            assert_eq!(active.len(), 1);
        }
        let view = render_language_picker(&l);
        assert_eq!(view.current_name, "English");
        assert_eq!(view.groups[0].title, "MOST USED");
    }

    #[test]
    fn load_more_offered_only_after_full_page() {
        let mut s = state();
        let t = s.content_search.begin_fresh("", None);
        s.content_search.apply_page(&t, hits(20));
        match render_content_results(&s) {
            ResultsView::Rows { rows, load_more } => {
                assert_eq!(rows.len(), 20);
                assert_eq!(load_more.unwrap().label, "Load More");
            }
            other => panic!("unexpected view {other:?}"),
        }

        let t = s.content_search.begin_fresh("x", None);
        s.content_search.apply_page(&t, hits(5));
        match render_content_results(&s) {
            ResultsView::Rows { load_more, .. } => assert!(load_more.is_none()),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn empty_content_message_depends_on_query() {
        let mut s = state();
        let t = s.content_search.begin_fresh("sodium", None);
        s.content_search.apply_page(&t, Vec::new());
        assert_eq!(
            render_content_results(&s),
            ResultsView::Empty {
                message: "No results found for \"sodium\"".into()
            }
        );

        let t = s.content_search.begin_fresh("", None);
        assert_eq!(
            render_content_results(&s),
            ResultsView::Loading {
                message: Some("Loading popular mods...".into())
            }
        );
        s.content_search.apply_page(&t, Vec::new());
        assert_eq!(
            render_content_results(&s),
            ResultsView::Empty {
                message: "No compatible items found for this instance.".into()
            }
        );
    }

    #[test]
    fn install_action_labels() {
        let l = Localizer::new(ResourceBundles::builtin().unwrap(), "en");
        assert_eq!(install_action(ActionState::Busy, &l).label, "Installing...");
        assert!(!install_action(ActionState::Done, &l).enabled);
        assert!(install_action(ActionState::Idle, &l).enabled);
    }

    #[test]
    fn modpack_versions_render_dates_and_fallbacks() {
        let mut s = state();
        s.modpack_versions = ListState::Loaded(vec![ModpackVersion {
            id: "v1".into(),
            name: None,
            date_published: Some("2024-03-01T10:00:00Z".into()),
            game_versions: vec!["1.20.1".into(), "1.20.2".into()],
            loaders: vec!["fabric".into()],
        }]);
        match render_modpack_versions(&s) {
            ListView::Items { rows } => {
                assert_eq!(rows[0].name, "Unnamed");
                assert_eq!(rows[0].details, "1.20.1, 1.20.2 • fabric");
                assert_eq!(rows[0].published, "2024-03-01");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn installed_rows_use_name_or_file() {
        let mut s = state();
        s.installed.insert(
            ContentKind::Mod,
            ListState::Loaded(vec![
                InstalledItem {
                    name: Some("Sodium".into()),
                    file_name: "sodium.jar".into(),
                },
                InstalledItem {
                    name: None,
                    file_name: "lithium.jar".into(),
                },
            ]),
        );
        match render_installed_items(&s, ContentKind::Mod) {
            InstalledItemsView::Items { rows } => {
                assert_eq!(rows[0].display_name, "Sodium");
                assert_eq!(rows[0].sub_text, "sodium.jar");
                assert_eq!(rows[1].display_name, "lithium.jar");
                assert_eq!(rows[1].sub_text, "Mod file");
            }
            other => panic!("unexpected view {other:?}"),
        }

        s.installed.insert(ContentKind::ShaderPack, ListState::Empty);
        match render_installed_items(&s, ContentKind::ShaderPack) {
            InstalledItemsView::Empty { add_label, .. } => assert_eq!(add_label, "Add shader"),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn status_shows_progress_only_while_loading() {
        let mut s = state();
        assert_eq!(render_status(&s).text, "Ready");
        assert!(render_status(&s).progress.is_none());
        s.set_loading(true);
        s.set_progress(42);
        assert_eq!(render_status(&s).progress.unwrap().label, "42%");
    }
}
