//! WASM adapter exposing quiz parsing and generation to a browser authoring UI
#![allow(non_snake_case)]

use quizcraft::{
    demo_quiz as builtin_demo, generate_quiz_html as generate, parse_questions, Question,
    QuestionType, Quiz, QuizDraft,
};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn js_error<E: std::fmt::Display>(err: E) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn parse_type(name: &str) -> Result<QuestionType, JsValue> {
    match name {
        "SINGLE" => Ok(QuestionType::Single),
        "MULTIPLE" => Ok(QuestionType::Multiple),
        "TRUE_FALSE" => Ok(QuestionType::TrueFalse),
        other => Err(js_error(format!("Unknown question type: {}", other))),
    }
}

/// Parse CSV text into an array of questions; throws with the row error
#[wasm_bindgen]
pub fn parse_questions_csv(contents: &str) -> Result<JsValue, JsValue> {
    let questions = parse_questions(contents).map_err(js_error)?;
    to_value(&questions).map_err(JsValue::from)
}

/// Change a question's type, returning the updated question
///
/// Clears correct answers; TRUE_FALSE also resets the options.
#[wasm_bindgen]
pub fn set_question_type(question: JsValue, question_type: &str) -> Result<JsValue, JsValue> {
    let mut question: Question = from_value(question)?;
    question.set_type(parse_type(question_type)?);
    to_value(&question).map_err(JsValue::from)
}

/// Mark or unmark a correct option, returning the updated question
#[wasm_bindgen]
pub fn toggle_correct_answer(
    question: JsValue,
    option_index: usize,
    checked: bool,
) -> Result<JsValue, JsValue> {
    let mut question: Question = from_value(question)?;
    question.toggle_correct(option_index, checked);
    to_value(&question).map_err(JsValue::from)
}

/// `null` when the quiz can be generated, otherwise a message for the user
#[wasm_bindgen]
pub fn validate_quiz(quiz: JsValue) -> Result<JsValue, JsValue> {
    let quiz: Quiz = from_value(quiz)?;
    let draft = QuizDraft::new()
        .with_title(quiz.title)
        .with_settings(quiz.settings)
        .with_questions(quiz.questions);
    Ok(match draft.validate() {
        Ok(()) => JsValue::NULL,
        Err(e) => JsValue::from_str(&e.to_string()),
    })
}

/// Render the standalone player document; no validation is performed
#[wasm_bindgen]
pub fn generate_quiz_html(quiz: JsValue) -> Result<String, JsValue> {
    let quiz: Quiz = from_value(quiz)?;
    generate(&quiz).map_err(js_error)
}

#[wasm_bindgen]
pub fn demo_quiz() -> Result<JsValue, JsValue> {
    to_value(&builtin_demo()).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn demo_quiz_html() -> Result<String, JsValue> {
    generate(&builtin_demo()).map_err(js_error)
}
