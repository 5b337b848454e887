use pulldown_cmark::{html, Options as CmarkOptions, Parser};

// compiles a page's raw markdown into HTML for display. the store never
// renders; this runs at the HTTP edge on the way out
pub fn compile_markdown_to_html(markdown_content: &str) -> String {
    let mut options = CmarkOptions::empty();
    options.insert(CmarkOptions::ENABLE_STRIKETHROUGH);
    options.insert(CmarkOptions::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown_content, options);

    let mut html_content = String::new();
    html::push_html(&mut html_content, parser);

    html_content
}
