use dioxus::prelude::*;

use crate::vm::QuizVm;

/// Multiple-choice quiz card.
///
/// The card reports every submitted answer through `on_answer`; whether a
/// wrong answer may be retried is the progression machine's decision, the
/// card just resets its local selection.
#[component]
pub fn QuizCard(quiz: QuizVm, on_answer: EventHandler<usize>) -> Element {
    let mut selected = use_signal(|| None::<usize>);
    let mut submitted = use_signal(|| false);

    let correct_index = quiz.correct_index;
    let is_correct = move || selected() == Some(correct_index);

    let submit = move |_| {
        let Some(choice) = selected() else { return };
        submitted.set(true);
        on_answer.call(choice);
    };

    let retry = move |_| {
        selected.set(None);
        submitted.set(false);
    };

    rsx! {
        div { class: "quiz-card",
            h3 { class: "quiz-question", "{quiz.question}" }
            div { class: "quiz-options", role: "radiogroup",
                for (index, option) in quiz.options.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "quiz-option",
                        class: if selected() == Some(index) { "selected" },
                        class: if submitted() && index == correct_index { "correct" },
                        class: if submitted() && selected() == Some(index) && index != correct_index { "wrong" },
                        disabled: submitted(),
                        onclick: move |_| selected.set(Some(index)),
                        "{option}"
                    }
                }
            }
            div { class: "quiz-footer",
                if !submitted() {
                    button {
                        class: "primary",
                        disabled: selected().is_none(),
                        onclick: submit,
                        "Submit Answer"
                    }
                } else if is_correct() {
                    span { class: "quiz-result correct", "Correct! Well done." }
                } else {
                    span { class: "quiz-result wrong", "Incorrect." }
                    button { class: "secondary", onclick: retry, "Try Again" }
                }
            }
        }
    }
}
