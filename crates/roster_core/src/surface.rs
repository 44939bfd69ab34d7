use crate::presenter::{DetailView, FormView, RenderModel, RosterView, TeamOptionsView};

/// Display surface the controller renders into. Implementations live outside
/// the core (terminal, GUI, test recorder) and must not call back into the
/// controller from these methods.
pub trait DisplaySurface: Send + Sync {
    fn render_roster(&self, view: &RosterView);

    fn render_detail(&self, view: &DetailView);

    fn render_team_options(&self, view: &TeamOptionsView);

    fn render_form(&self, view: &FormView);

    /// Blocking, interrupting notification.
    fn alert(&self, message: &str);

    fn render_all(&self, model: &RenderModel) {
        self.render_roster(&model.roster);
        self.render_detail(&model.detail);
        self.render_team_options(&model.team_options);
        self.render_form(&model.form);
    }
}
