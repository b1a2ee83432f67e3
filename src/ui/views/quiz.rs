use egui::{Button, Color32, Context, ProgressBar, RichText, Stroke};

use crate::app::ReaderApp;
use crate::progress::EXP_PER_CORRECT;
use crate::quiz::QuizPhase;
use crate::ui::layout::simple_panel;

pub fn ui_quiz(app: &mut ReaderApp, ctx: &Context) {
    let Some(session) = app.quiz.as_ref() else {
        app.quiz_ended_without_session();
        return;
    };
    let chapter_title = app
        .current_chapter()
        .map(|c| c.title.clone())
        .unwrap_or_default();

    let question = session.current_question().clone();
    let phase = session.phase();
    let selected = session.selected().map(str::to_owned);
    let revealed_answer = session.answers().last().cloned();
    let index = session.index();
    let total = session.question_count();
    let correct = session.correct_count();
    let answered = session.answered_count();
    let is_last = session.is_last_question();
    let can_leave = session.can_abandon();

    let mut pick: Option<String> = None;
    let (mut submit, mut back) = (false, false);

    simple_panel(ctx, 680.0, egui::Margin::symmetric(24, 16), |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("理解度チェック");
                ui.label(RichText::new(&chapter_title).weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                back = ui.add_enabled(can_leave, Button::new("⬅")).clicked();
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(format!("質問 {} / {}", index + 1, total));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("正解: {correct} / {answered}"));
            });
        });
        ui.add(ProgressBar::new((index + 1) as f32 / total as f32));
        ui.add_space(16.0);

        ui.label(RichText::new(&question.question).heading().strong());
        ui.add_space(12.0);

        let width = ui.available_width();
        for option in &question.options {
            let (fill, mark) = match phase {
                QuizPhase::ShowingResult { .. } if *option == question.answer => {
                    (Some(Color32::from_rgb(22, 101, 52)), " ✔")
                }
                QuizPhase::ShowingResult { .. } if revealed_answer.as_ref() == Some(option) => {
                    (Some(Color32::from_rgb(153, 27, 27)), " ✖")
                }
                QuizPhase::Answering if selected.as_ref() == Some(option) => {
                    (Some(Color32::from_rgb(30, 64, 175)), "")
                }
                _ => (None, ""),
            };
            let mut button = Button::new(format!("{option}{mark}")).min_size([width, 40.0].into());
            if let Some(fill) = fill {
                button = button.fill(fill).stroke(Stroke::new(1.0, Color32::WHITE));
            }
            let enabled = matches!(phase, QuizPhase::Answering);
            if ui.add_enabled(enabled, button).clicked() {
                pick = Some(option.clone());
            }
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        match phase {
            QuizPhase::ShowingResult { correct: true, .. } => {
                ui.label(RichText::new("✔ 正解です！").color(Color32::GREEN).strong());
                ui.label(
                    RichText::new(format!("+{EXP_PER_CORRECT} EXP を獲得しました！"))
                        .color(Color32::GREEN),
                );
            }
            QuizPhase::ShowingResult { correct: false, .. } => {
                ui.label(RichText::new("✖ 間違いです。").color(Color32::RED).strong());
            }
            QuizPhase::Answering => {
                let label = if is_last { "完了" } else { "次の質問" };
                submit = ui
                    .add_enabled(selected.is_some(), Button::new(label).min_size([width, 40.0].into()))
                    .clicked();
            }
            QuizPhase::Completed => {}
        }
    });

    if let Some(option) = pick {
        app.select_answer(&option);
    }
    if submit {
        let now = ctx.input(|i| i.time);
        app.submit_answer(now);
        ctx.request_repaint();
    }
    if back {
        app.leave_quiz();
    }
}
