use shared::domain::{EmbeddedTeam, Team};

use super::*;

fn rex() -> Entry {
    Entry::new(EntryId::Int(1), "Rex", "Lab")
}

fn state_with(entries: Vec<Entry>, teams: Vec<Team>) -> ViewState {
    let mut state = ViewState::default();
    state.store.replace_roster(entries);
    state.store.replace_teams(teams);
    state
}

#[test]
fn empty_roster_shows_message() {
    let state = ViewState::default();
    assert_eq!(
        roster_view(&state),
        RosterView::Empty {
            message: EMPTY_ROSTER_MESSAGE.into()
        }
    );
}

#[test]
fn roster_cards_follow_store_order_with_placeholders() {
    let mut nameless = Entry::new(EntryId::Int(8), "", "Pug");
    nameless.name = None;
    let state = state_with(
        vec![
            Entry::new(EntryId::Int(4), "Zed", "Pug").with_image_url("http://img/zed.png"),
            nameless,
            rex(),
        ],
        Vec::new(),
    );

    let RosterView::Cards(cards) = roster_view(&state) else {
        panic!("expected cards");
    };
    let names: Vec<&str> = cards.iter().map(|c| c.display_name.as_str()).collect();
    assert_eq!(names, vec!["Zed", MISSING_VALUE, "Rex"]);
    assert_eq!(cards[0].image, ImageRef::Url("http://img/zed.png".into()));
    assert_eq!(cards[2].image, ImageRef::Placeholder);
    assert_eq!(cards[1].meta, "ID 8");
}

#[test]
fn card_without_usable_name_shows_missing_value() {
    let absent: Entry =
        serde_json::from_value(serde_json::json!({ "id": 3, "breed": "Lab" })).expect("entry");
    let blank: Entry = serde_json::from_value(serde_json::json!({ "id": "pup-b", "name": "  " }))
        .expect("entry");
    let state = state_with(vec![absent, blank], Vec::new());

    let RosterView::Cards(cards) = roster_view(&state) else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|card| card.display_name == MISSING_VALUE));
    assert_eq!(cards[1].meta, "ID pup-b");
}

#[test]
fn roster_error_overrides_cards() {
    let mut state = state_with(vec![rex()], Vec::new());
    state.roster_error = Some("boom".into());
    assert_eq!(
        roster_view(&state),
        RosterView::Error {
            message: "boom".into()
        }
    );
}

#[test]
fn detail_without_selection_shows_prompt() {
    let state = state_with(vec![rex()], Vec::new());
    assert_eq!(
        detail_view(&state),
        DetailView::Empty {
            message: NO_SELECTION_MESSAGE.into()
        }
    );
}

#[test]
fn detail_applies_documented_fallbacks() {
    let mut state = state_with(Vec::new(), Vec::new());
    let mut bare = Entry::new(EntryId::Int(1), "Rex", "Lab").with_team_id(TeamId::Int(5));
    bare.breed = None;
    state.store.select(Some(bare));

    let DetailView::Entry(card) = detail_view(&state) else {
        panic!("expected detail card");
    };
    assert_eq!(card.heading, "Rex #1");
    assert_eq!(card.breed, UNKNOWN_VALUE);
    assert_eq!(card.status, UNKNOWN_VALUE);
    assert_eq!(card.team, "Team #5");
    assert_eq!(card.image, ImageRef::Placeholder);
    assert!(card.remove.enabled);
}

#[test]
fn detail_prefers_embedded_team_and_keeps_falsy_status() {
    let mut state = state_with(Vec::new(), vec![Team { id: TeamId::Int(5), name: "Lookup".into() }]);
    state.store.select(Some(
        rex()
            .with_status("0")
            .with_team_id(TeamId::Int(5))
            .with_team(EmbeddedTeam {
                id: Some(TeamId::Int(5)),
                name: Some("Embedded".into()),
            }),
    ));

    let DetailView::Entry(card) = detail_view(&state) else {
        panic!("expected detail card");
    };
    assert_eq!(card.status, "0");
    assert_eq!(card.team, "Embedded");
}

#[test]
fn remove_action_disabled_while_removal_in_flight() {
    let mut state = state_with(Vec::new(), Vec::new());
    state.store.select(Some(rex()));
    state.removing.insert(EntryId::Int(1));

    let DetailView::Entry(card) = detail_view(&state) else {
        panic!("expected detail card");
    };
    assert!(!card.remove.enabled);
    assert_eq!(card.remove.label, REMOVE_ACTION_LABEL);
}

#[test]
fn detail_error_is_shown_without_dropping_selection() {
    let mut state = state_with(Vec::new(), Vec::new());
    state.store.select(Some(rex()));
    state.detail_error = Some("Could not load puppy #2.".into());

    assert!(matches!(detail_view(&state), DetailView::Error { .. }));
    assert_eq!(state.store.selected_id(), Some(&EntryId::Int(1)));
}

#[test]
fn team_options_start_with_sentinel_in_load_order() {
    let state = state_with(
        Vec::new(),
        vec![
            Team { id: TeamId::Int(9), name: "Zulu".into() },
            Team { id: TeamId::Int(2), name: String::new() },
        ],
    );

    let view = team_options_view(&state);
    assert_eq!(
        view.options,
        vec![
            TeamOption { value: None, label: NO_TEAM_OPTION_LABEL.into() },
            TeamOption { value: Some(TeamId::Int(9)), label: "Zulu".into() },
            TeamOption { value: Some(TeamId::Int(2)), label: "Team #2".into() },
        ]
    );
}

#[test]
fn form_view_reflects_pending_submission() {
    let mut state = ViewState::default();
    state.form.input = FormInput::new("Rex", "Lab");
    state.form.submitting = true;

    let view = form_view(&state);
    assert_eq!(view.name, "Rex");
    assert!(!view.submit_enabled);
}

#[test]
fn render_is_deterministic() {
    let mut state = state_with(vec![rex(), Entry::new(EntryId::Int(2), "Bo", "Pug")], Vec::new());
    state.store.select(Some(rex()));
    assert_eq!(render(&state), render(&state.clone()));
}
