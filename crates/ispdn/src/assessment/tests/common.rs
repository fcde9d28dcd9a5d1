use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::assessment::context::{
    PLACEHOLDER_CATEGORY, PLACEHOLDER_EMPLOYEES, PLACEHOLDER_HEAD_POSITION, PLACEHOLDER_LEVEL,
    PLACEHOLDER_ORGANIZATION, PLACEHOLDER_THREATS, PLACEHOLDER_VOLUME,
};
use crate::assessment::{assessment_router, AssessmentState};
use crate::document::{render, Paragraph, StructuredDocument, Table, TextRun};

pub(super) fn router_with_template(act_template: PathBuf) -> Router {
    assessment_router(Arc::new(AssessmentState { act_template }))
}

pub(super) fn router_without_template() -> Router {
    router_with_template(PathBuf::from("/nonexistent/templates/act_template.docx"))
}

/// Act template carrying every placeholder, one of them split across runs.
pub(super) fn write_act_template(dir: &Path) -> PathBuf {
    let mut document = StructuredDocument::new();
    document
        .heading("АКТ определения уровня защищённости", 1)
        .text(format!("УТВЕРЖДАЮ [{PLACEHOLDER_HEAD_POSITION}]"))
        .text(format!("[{PLACEHOLDER_ORGANIZATION}]"))
        .paragraph(Paragraph::from_runs(vec![
            TextRun::plain("Информационная система: [Наименование "),
            TextRun::bold("ИСПДн]"),
        ]))
        .table(Table::from_text_rows([
            ["Категория ПДн", format!("[{PLACEHOLDER_CATEGORY}]").as_str()],
            ["Субъекты", format!("[{PLACEHOLDER_EMPLOYEES}]").as_str()],
            ["Объём", format!("[{PLACEHOLDER_VOLUME}]").as_str()],
            ["Угрозы", format!("[{PLACEHOLDER_THREATS}]").as_str()],
            ["Уровень", format!("[{PLACEHOLDER_LEVEL}]").as_str()],
        ]))
        .text("Дата: ____________ (укажите дату)");

    let path = dir.join("act_template.docx");
    std::fs::write(&path, render(&document).expect("template renders")).expect("template written");
    path
}

pub(super) fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serializable body")))
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_slice(&read_body(response).await).expect("json payload")
}
