use axum::{extract::State, response::Html};
use minijinja::context;

use crate::{error::HtmlError, html_state::HtmlState};

pub async fn index_handler(State(state): State<HtmlState>) -> Result<Html<String>, HtmlError> {
    let template = state.templates.get_template("index.html")?;
    let html = template.render(context! {
        title => "Medical Q&A Assistant",
    })?;

    Ok(Html(html))
}
