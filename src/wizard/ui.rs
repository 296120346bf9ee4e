use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};

use super::{QuestionKind, WizardApp, WizardState};
use crate::ui::Layout;
use crate::ui::widgets::Control;

const INPUT_BOX_WIDTH: u16 = 80;
const INPUT_BOX_HEIGHT: u16 = 3;

/// Maps the wizard state to a frame. Pure: nothing in here mutates the
/// app, so drawing the same state twice yields identical buffers.
pub fn draw(frame: &mut Frame, app: &WizardApp) {
    let layout = Layout::new(frame.area());

    frame.render_widget(
        Paragraph::new("iswiz · create application").style(app.theme.title_style()),
        layout.header,
    );

    match app.state {
        WizardState::Initiated => app.templates.draw(frame, layout.content, &app.theme),
        WizardState::TemplateSelected | WizardState::QuestionsCompleted => {
            draw_questions(frame, layout.content, app);
        }
        WizardState::SubmitInProgress => draw_submitting(frame, layout.content, app),
        WizardState::SubmitSucceeded => {
            frame.render_widget(
                Paragraph::new("Application created successfully!")
                    .style(app.theme.success_style()),
                layout.content,
            );
        }
        WizardState::SubmitFailed => {
            frame.render_widget(
                Paragraph::new(format!("Error creating application: {}", app.error_text()))
                    .style(app.theme.error_style())
                    .wrap(Wrap { trim: false }),
                layout.content,
            );
        }
    }

    frame.render_widget(
        Paragraph::new(footer_hint(app.state)).style(app.theme.muted_style()),
        layout.footer,
    );
}

fn draw_submitting(frame: &mut Frame, area: Rect, app: &WizardApp) {
    if area.width < 3 || area.height == 0 {
        return;
    }

    app.spinner
        .draw(frame, Rect::new(area.x, area.y, 1, 1), &app.theme);
    frame.render_widget(
        Paragraph::new("Creating application...").style(app.theme.primary_style()),
        Rect::new(area.x + 2, area.y, area.width - 2, 1),
    );
}

fn draw_questions(frame: &mut Frame, area: Rect, app: &WizardApp) {
    if !app.template.is_some_and(|t| t.is_supported()) {
        frame.render_widget(
            Paragraph::new("Not supported yet!").style(app.theme.error_style()),
            area,
        );
        return;
    }

    // Confirmed answers first, one per line, in confirmation order.
    let mut y = area.y;
    for question in &app.questions[..app.current_question] {
        if y >= area.bottom() {
            return;
        }
        frame.render_widget(
            Paragraph::new(format!("{}: {}", question.prompt, question.answer))
                .style(app.theme.style()),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    }

    y += 1;
    if y + INPUT_BOX_HEIGHT <= area.bottom() {
        let input_area = Rect::new(
            area.x,
            y,
            area.width.min(INPUT_BOX_WIDTH),
            INPUT_BOX_HEIGHT,
        );
        let question = &app.questions[app.current_question];
        match question.kind {
            QuestionKind::ShortAnswer => question.input.draw(frame, input_area, &app.theme),
        }
    }
}

fn footer_hint(state: WizardState) -> &'static str {
    match state {
        WizardState::Initiated => "j/k move · Enter select · Ctrl+C quit",
        WizardState::TemplateSelected | WizardState::QuestionsCompleted => {
            "Enter confirm · Ctrl+C quit"
        }
        WizardState::SubmitInProgress => "Ctrl+C quit",
        WizardState::SubmitSucceeded | WizardState::SubmitFailed => "Enter/q quit",
    }
}
