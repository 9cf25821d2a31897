//! End-to-end rewrites of `require()` calls, source in and source out.

use webp_swap::{SourceType, TransformOutput, WebpTransformer, transform};
use webp_swap_config::{RewritableShapes, WebpOptions};

fn run(source: &str) -> TransformOutput {
    WebpTransformer::default()
        .transform(source, SourceType::mjs())
        .unwrap_or_else(|e| panic!("transform failed for {source}: {e}"))
}

fn run_with(source: &str, options: &WebpOptions) -> TransformOutput {
    transform(source, SourceType::mjs(), options)
        .unwrap_or_else(|e| panic!("transform failed for {source}: {e}"))
}

#[test]
fn plain_string_argument() {
    let out = run(r#"require("./a.png")"#);
    assert_eq!(
        out.code.trim(),
        r#"require(window.isSupportWebp ? "./a.webp" : "./a.png");"#
    );
    assert_eq!(out.report.rewritten, 1);
}

#[test]
fn jpg_and_jpeg_arguments() {
    let out = run(r#"require("./a.jpg")"#);
    assert_eq!(
        out.code.trim(),
        r#"require(window.isSupportWebp ? "./a.webp" : "./a.jpg");"#
    );

    let out = run(r#"require("./a.jpeg")"#);
    assert_eq!(
        out.code.trim(),
        r#"require(window.isSupportWebp ? "./a.webp" : "./a.jpeg");"#
    );
}

#[test]
fn require_calls_inside_a_ternary() {
    let out = run(r#"a ? require("./a.png") : require("./b.png")"#);
    assert!(
        out.code
            .contains(r#"require(window.isSupportWebp ? "./a.webp" : "./a.png")"#)
    );
    assert!(
        out.code
            .contains(r#"require(window.isSupportWebp ? "./b.webp" : "./b.png")"#)
    );
    assert_eq!(out.report.loader_calls, 2);
    assert_eq!(out.report.rewritten, 2);
}

#[test]
fn ternary_argument() {
    let out = run(r#"require(obj.png ? "./a.png" : "./b.jpg")"#);
    assert!(out.code.starts_with("require(obj.png ?"));
    assert!(out.code.contains(r#"window.isSupportWebp ? "./a.webp" : "./a.png""#));
    assert!(out.code.contains(r#"window.isSupportWebp ? "./b.webp" : "./b.jpg""#));
    // the test expression mentions png but is never rewritten
    assert!(!out.code.contains("obj.webp"));
    assert_eq!(out.report.rewritten, 1);
}

#[test]
fn nested_ternary_argument() {
    let out = run(r#"require(obj.webp ? obj.png ? "./a.png" : "./b.jpg" : "./d.png")"#);
    assert!(out.code.starts_with("require(obj.webp ?"));
    assert!(out.code.contains("obj.png ?"));
    for (webp, original) in [
        ("./a.webp", "./a.png"),
        ("./b.webp", "./b.jpg"),
        ("./d.webp", "./d.png"),
    ] {
        let branch = format!(r#"window.isSupportWebp ? "{webp}" : "{original}""#);
        assert!(out.code.contains(&branch), "missing {branch} in {}", out.code);
    }
    assert_eq!(out.code.matches("window.isSupportWebp").count(), 3);
}

#[test]
fn parenthesized_nested_ternary_argument() {
    let out = run(r#"require(a ? (b ? "./x.png" : "./y.png") : "./z.png")"#);
    for (webp, original) in [
        ("./x.webp", "./x.png"),
        ("./y.webp", "./y.png"),
        ("./z.webp", "./z.png"),
    ] {
        let branch = format!(r#"window.isSupportWebp ? "{webp}" : "{original}""#);
        assert!(out.code.contains(&branch), "missing {branch} in {}", out.code);
    }
    assert_eq!(out.code.matches("window.isSupportWebp").count(), 3);
    assert_eq!(out.report.rewritten, 1);
}

#[test]
fn parenthesized_string_argument() {
    let out = run(r#"require(("./a.png"))"#);
    assert_eq!(
        out.code.trim(),
        r#"require(window.isSupportWebp ? "./a.webp" : "./a.png");"#
    );
}

#[test]
fn template_literal_argument() {
    let out = run("require(`./png_${index}.png`)");
    assert_eq!(
        out.code.trim(),
        "require(window.isSupportWebp ? `./png_${index}.webp` : `./png_${index}.png`);"
    );
}

#[test]
fn template_with_extension_only_in_expression() {
    let out = run("require(`./png_${index.png}.js`)");
    assert!(!out.code.contains("isSupportWebp"));
    assert!(out.code.contains("`./png_${index.png}.js`"));
    assert_eq!(out.report.rewritten, 0);
}

#[test]
fn template_with_extension_in_expression_and_quasi() {
    let out = run("require(`./png_${index.png}.png`)");
    assert!(
        out.code
            .contains("window.isSupportWebp ? `./png_${index.png}.webp` : `./png_${index.png}.png`")
    );
}

#[test]
fn template_without_extension() {
    let out = run("require(`./png_${index}.js`)");
    assert_eq!(out.code.trim(), "require(`./png_${index}.js`);");
}

#[test]
fn ignore_comment_leaves_argument_untouched() {
    let out = run(r#"require("./a.png" /*webp-ignore*/)"#);
    let compact: String = out.code.split_whitespace().collect();
    assert_eq!(compact, r#"require("./a.png"/*webp-ignore*/);"#);
    assert!(!out.code.contains("isSupportWebp"));
    assert_eq!(out.report.skipped_by_annotation, 1);
}

#[test]
fn ignore_comment_skips_whole_ternary() {
    let out = run(r#"require(dark ? "./a.png" : "./b.png" /* webp-ignore: svg sprite */)"#);
    assert!(!out.code.contains("isSupportWebp"));
}

#[test]
fn comment_after_call_does_not_skip() {
    let out = run("require(\"./a.png\"); // webp-ignore\n");
    assert!(out.code.contains("isSupportWebp"));
}

#[test]
fn unrecognized_extension_is_unchanged() {
    let out = run(r#"require("./png.js")"#);
    assert_eq!(out.code.trim(), r#"require("./png.js");"#);
}

#[test]
fn inline_query_is_unchanged() {
    let out = run(r#"require("./a.png?inline")"#);
    assert!(!out.code.contains("isSupportWebp"));

    let out = run("require(`./icons/${name}.png?inline`)");
    assert!(!out.code.contains("isSupportWebp"));
}

#[test]
fn other_callees_and_arities_are_ignored() {
    let out = run(r#"load("./a.png"); require("./a.png", opts); module.require("./a.png");"#);
    assert!(!out.code.contains("isSupportWebp"));
    assert_eq!(out.report.loader_calls, 0);
}

#[test]
fn spread_argument_is_ignored() {
    let out = run("require(...paths)");
    assert!(!out.code.contains("isSupportWebp"));
    assert_eq!(out.report.loader_calls, 0);
}

#[test]
fn nested_loader_call_in_argument() {
    let out = run(r#"require(require("./a.png"))"#);
    assert_eq!(out.report.loader_calls, 2);
    assert_eq!(out.report.rewritten, 1);
    assert_eq!(out.code.matches("window.isSupportWebp").count(), 1);
}

#[test]
fn custom_loader_target_and_predicate() {
    let options = WebpOptions::default()
        .with_loader("asset")
        .with_extensions([".gif"])
        .with_target_extension(".avif")
        .with_support_predicate("self.caps.avif");
    let out = run_with(r#"asset("./spin.gif"); require("./a.png");"#, &options);
    assert!(out.code.contains(r#"asset(self.caps.avif ? "./spin.avif" : "./spin.gif")"#));
    assert!(out.code.contains(r#"require("./a.png")"#));
}

#[test]
fn disabled_template_shape() {
    let options = WebpOptions::default().with_shapes(RewritableShapes {
        template_literal: false,
        ..RewritableShapes::default()
    });
    let out = run_with(r#"require(`./${a}.png`); require("./b.png");"#, &options);
    assert!(out.code.contains("require(`./${a}.png`)"));
    assert!(out.code.contains(r#""./b.webp""#));
    assert_eq!(out.report.rewritten, 1);
}

#[test]
fn empty_extension_list_rewrites_nothing() {
    let options = WebpOptions::default().with_extensions(Vec::<String>::new());
    let out = run_with(r#"require("./a.png")"#, &options);
    assert!(!out.code.contains("isSupportWebp"));
}

#[test]
fn parse_errors_are_reported() {
    let err = WebpTransformer::default()
        .transform("require(", SourceType::mjs())
        .unwrap_err();
    assert!(matches!(err, webp_swap::WebpError::ParseFailed { .. }));
}

#[test]
fn invalid_options_are_reported() {
    let options = WebpOptions::default().with_ignore_marker("");
    let err = transform("require('./a.png')", SourceType::mjs(), &options).unwrap_err();
    assert!(matches!(err, webp_swap::WebpError::Config(_)));
}

#[test]
fn babel_style_options_from_json() {
    let options = WebpOptions::from_value(serde_json::json!({
        "supportExt": [".png", ".jpg", ".jpeg"],
        "childNodeType": {
            "ConditionalExpression": true,
            "TemplateLiteral": true,
            "StringLiteral": true
        }
    }))
    .unwrap();
    let out = run_with(r#"require("./a.png")"#, &options);
    assert_eq!(
        out.code.trim(),
        r#"require(window.isSupportWebp ? "./a.webp" : "./a.png");"#
    );
}
