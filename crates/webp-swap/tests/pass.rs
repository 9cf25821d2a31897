//! Driving `RequirePass` over parsed programs directly.

use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, Statement};
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;
use webp_swap::{NodeId, RequirePass, RewriteConfig, RewriteReport, WebpTransformer};

fn loader_argument<'p, 'a>(stmt: &'p Statement<'a>) -> &'p Expression<'a> {
    let Statement::ExpressionStatement(stmt) = stmt else {
        panic!("expected expression statement");
    };
    let Expression::CallExpression(call) = &stmt.expression else {
        panic!("expected call expression");
    };
    call.arguments[0]
        .as_expression()
        .expect("argument should be an expression")
}

#[test]
fn rerunning_the_pass_is_identity() {
    let allocator = Allocator::default();
    let source = r#"require(flag ? "./a.png" : `./${b}.jpg`);"#;
    let mut program = Parser::new(&allocator, source, SourceType::mjs())
        .parse()
        .program;
    let config = RewriteConfig::default();
    let mut pass = RequirePass::new(&allocator, &config, &program);

    let first = pass.run(&mut program).unwrap();
    assert_eq!(
        first,
        RewriteReport {
            loader_calls: 1,
            rewritten: 1,
            skipped_by_annotation: 0,
        }
    );
    let id_after_first = NodeId::of(loader_argument(&program.body[0]));
    let code_after_first = Codegen::new().build(&program).code;

    let second = pass.run(&mut program).unwrap();
    assert_eq!(second.loader_calls, 2);
    assert_eq!(second.rewritten, 1, "second run must not wrap again");
    assert_eq!(NodeId::of(loader_argument(&program.body[0])), id_after_first);
    assert_eq!(Codegen::new().build(&program).code, code_after_first);
    assert_eq!(code_after_first.matches("window.isSupportWebp").count(), 2);
}

#[test]
fn fresh_pass_over_rewritten_program_wraps_again() {
    // identity lives in the pass; a new pass has never seen these nodes
    let allocator = Allocator::default();
    let mut program = Parser::new(&allocator, r#"require("./a.png");"#, SourceType::mjs())
        .parse()
        .program;
    let config = RewriteConfig::default();

    RequirePass::new(&allocator, &config, &program)
        .run(&mut program)
        .unwrap();
    let report = RequirePass::new(&allocator, &config, &program)
        .run(&mut program)
        .unwrap();

    assert_eq!(report.rewritten, 1);
    let code = Codegen::new().build(&program).code;
    assert_eq!(code.matches("window.isSupportWebp").count(), 2);
}

#[test]
fn skipped_argument_keeps_identity() {
    let allocator = Allocator::default();
    let source = r#"require("./a.png" /* webp-ignore */);"#;
    let mut program = Parser::new(&allocator, source, SourceType::mjs())
        .parse()
        .program;
    let before = NodeId::of(loader_argument(&program.body[0]));

    let config = RewriteConfig::default();
    let report = RequirePass::new(&allocator, &config, &program)
        .run(&mut program)
        .unwrap();

    assert_eq!(report.skipped_by_annotation, 1);
    assert_eq!(NodeId::of(loader_argument(&program.body[0])), before);
}

#[test]
fn every_loader_call_in_nested_functions_is_found() {
    let allocator = Allocator::default();
    let source = r#"
        function icon(name) {
            return () => require(`./icons/${name}.png`);
        }
        const images = [require("./a.jpg"), require("./b.gif")];
    "#;
    let mut program = Parser::new(&allocator, source, SourceType::mjs())
        .parse()
        .program;
    let config = RewriteConfig::default();
    let report = RequirePass::new(&allocator, &config, &program)
        .run(&mut program)
        .unwrap();

    assert_eq!(report.loader_calls, 3);
    assert_eq!(report.rewritten, 2);
}

#[test]
fn fresh_pass_ignores_annotations_above_the_call() {
    let allocator = Allocator::default();
    let source = "// webp-ignore\nsetup();\nrequire(\"./a.png\");\n";
    let mut program = Parser::new(&allocator, source, SourceType::mjs())
        .parse()
        .program;
    let config = RewriteConfig::default();

    let first = RequirePass::new(&allocator, &config, &program)
        .run(&mut program)
        .unwrap();
    assert_eq!(first.rewritten, 1);

    let second = RequirePass::new(&allocator, &config, &program)
        .run(&mut program)
        .unwrap();
    assert_eq!(second.skipped_by_annotation, 0);
    assert_eq!(second.rewritten, 1);
}

#[test]
fn caller_parsed_program_with_parens_is_rewritten() {
    // default parse options keep ParenthesizedExpression nodes
    let allocator = Allocator::default();
    let source = r#"require(a ? (b ? "./x.png" : "./y.png") : "./z.png");"#;
    let mut program = Parser::new(&allocator, source, SourceType::mjs())
        .parse()
        .program;

    let report = WebpTransformer::default()
        .transform_program(&allocator, &mut program)
        .unwrap();
    assert_eq!(report.rewritten, 1);

    let code = Codegen::new().build(&program).code;
    assert_eq!(code.matches("window.isSupportWebp").count(), 3, "{code}");
}
