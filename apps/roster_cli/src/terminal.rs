//! Prints render models to stdout.

use roster_core::{
    presenter::{
        DetailView, FormMessage, FormView, ImageRef, RosterView, TeamOptionsView,
    },
    DisplaySurface,
};

pub struct TerminalSurface;

fn image_label(image: &ImageRef) -> &str {
    match image {
        ImageRef::Url(url) => url,
        ImageRef::Placeholder => "(no image)",
    }
}

impl DisplaySurface for TerminalSurface {
    fn render_roster(&self, view: &RosterView) {
        println!("== Roster");
        match view {
            RosterView::Empty { message } => println!("{message}"),
            RosterView::Error { message } => println!("! {message}"),
            RosterView::Cards(cards) => {
                for card in cards {
                    println!("  [{}] {:<24} {}", card.meta, card.display_name, image_label(&card.image));
                }
            }
        }
    }

    fn render_detail(&self, view: &DetailView) {
        println!("== Details");
        match view {
            DetailView::Empty { message } => println!("{message}"),
            DetailView::Error { message } => println!("! {message}"),
            DetailView::Entry(card) => {
                println!("{}", card.heading);
                println!("  Image:  {}", image_label(&card.image));
                println!("  Breed:  {}", card.breed);
                println!("  Status: {}", card.status);
                println!("  Team:   {}", card.team);
                let state = if card.remove.enabled { "" } else { " (in progress)" };
                println!("  > remove {}  {}{state}", card.id, card.remove.label);
            }
        }
    }

    fn render_team_options(&self, view: &TeamOptionsView) {
        let labels: Vec<String> = view
            .options
            .iter()
            .map(|option| match &option.value {
                Some(id) => format!("{id}={}", option.label),
                None => option.label.clone(),
            })
            .collect();
        println!("== Teams: {}", labels.join(", "));
    }

    fn render_form(&self, view: &FormView) {
        match &view.message {
            Some(FormMessage::Success(message)) => println!("+ {message}"),
            Some(FormMessage::Error(message)) => println!("! {message}"),
            None if !view.submit_enabled => println!("... submitting"),
            None => {}
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("\n*** {message} ***\n");
    }
}
