/*
 * export.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Construction of the `mdxjsEsm` nodes that expose frontmatter data.

use crate::error::{FrontmatterError, Result};
use crate::estree_value::value_to_estree;
use crate::identifier::is_identifier_name;
use crate::value::FrontmatterRecord;
use mdx_ast::estree::{
    Declaration, ExportNamedDeclaration, ExportSpecifier, Identifier, Literal, LiteralValue,
    ModuleItem, Program, SourceType, VariableDeclaration, VariableDeclarator, VariableKind,
};
use mdx_ast::mdast::MdxjsEsm;

/// Create an `export const` node from a record.
///
/// Each key of the record becomes an export name, in record order, all in
/// one declaration: `export const a = 1, b = "s";`.
///
/// # Errors
///
/// Returns [`FrontmatterError::InvalidKey`] for the first key that is not
/// a valid identifier name.
pub fn create_export(record: &FrontmatterRecord) -> Result<MdxjsEsm> {
    let declarations = record
        .iter()
        .map(|(name, value)| {
            if !is_identifier_name(name) {
                return Err(FrontmatterError::InvalidKey(name.clone()));
            }
            Ok(VariableDeclarator {
                id: Identifier::new(name.as_str()),
                init: Some(value_to_estree(value)),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(esm_export(ExportNamedDeclaration {
        declaration: Some(Declaration::Variable(VariableDeclaration {
            kind: VariableKind::Const,
            declarations,
        })),
        specifiers: vec![],
        source: None,
    }))
}

/// Create a re-export of another module's default export:
/// `export {default as local} from "source";`.
///
/// `source` is passed through as-is, whatever primitive it is. `local` is
/// expected to be a valid identifier name already.
pub fn create_import_export(source: impl Into<LiteralValue>, local: &str) -> MdxjsEsm {
    esm_export(ExportNamedDeclaration {
        declaration: None,
        specifiers: vec![ExportSpecifier {
            local: Identifier::new("default"),
            exported: Identifier::new(local),
        }],
        source: Some(Literal::new(source)),
    })
}

fn esm_export(export: ExportNamedDeclaration) -> MdxjsEsm {
    MdxjsEsm::from_program(Program::new(
        SourceType::Module,
        vec![ModuleItem::ExportNamedDeclaration(export)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FrontmatterValue;
    use mdx_ast::codegen::to_js;
    use serde_json::json;

    fn record(entries: Vec<(&str, FrontmatterValue)>) -> FrontmatterRecord {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_create_export_one_declarator_per_key() {
        let esm = create_export(&record(vec![
            ("a", FrontmatterValue::from(1)),
            ("b", FrontmatterValue::from("s")),
        ]))
        .unwrap();

        assert_eq!(esm.value, "");
        insta::assert_snapshot!(to_js(esm.program().unwrap()), @r#"export const a = 1, b = "s";"#);
    }

    #[test]
    fn test_create_export_estree_shape() {
        let esm = create_export(&record(vec![("title", FrontmatterValue::from("Hi"))])).unwrap();
        let estree = serde_json::to_value(esm.program().unwrap()).unwrap();
        assert_eq!(
            estree["body"][0]["declaration"]["declarations"][0],
            json!({
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "title" },
                "init": { "type": "Literal", "value": "Hi" }
            })
        );
        assert_eq!(estree["body"][0]["source"], json!(null));
    }

    #[test]
    fn test_create_export_rejects_invalid_key() {
        let err = create_export(&record(vec![
            ("ok", FrontmatterValue::from(1)),
            ("1bad", FrontmatterValue::from(2)),
        ]))
        .unwrap_err();

        assert!(matches!(&err, FrontmatterError::InvalidKey(key) if key == "1bad"));
        assert_eq!(
            err.to_string(),
            r#"Frontmatter keys should be valid identifiers, got: "1bad""#
        );
    }

    #[test]
    fn test_create_export_undefined_binding() {
        let esm = create_export(&record(vec![("frontmatter", FrontmatterValue::Undefined)]))
            .unwrap();
        insta::assert_snapshot!(to_js(esm.program().unwrap()), @"export const frontmatter = undefined;");
    }

    #[test]
    fn test_create_import_export() {
        let esm = create_import_export("./Layout.jsx", "layout");
        insta::assert_snapshot!(
            to_js(esm.program().unwrap()),
            @r#"export {default as layout} from "./Layout.jsx";"#
        );

        let estree = serde_json::to_value(esm.program().unwrap()).unwrap();
        assert_eq!(
            estree["body"][0],
            json!({
                "type": "ExportNamedDeclaration",
                "declaration": null,
                "specifiers": [{
                    "type": "ExportSpecifier",
                    "local": { "type": "Identifier", "name": "default" },
                    "exported": { "type": "Identifier", "name": "layout" }
                }],
                "source": { "type": "Literal", "value": "./Layout.jsx" }
            })
        );
    }

    #[test]
    fn test_import_source_is_opaque() {
        let esm = create_import_export("not a path \"at all\"", "x");
        insta::assert_snapshot!(
            to_js(esm.program().unwrap()),
            @r#"export {default as x} from "not a path \"at all\"";"#
        );
    }

    #[test]
    fn test_import_source_keeps_primitive_type() {
        let esm = create_import_export(true, "layout");
        insta::assert_snapshot!(
            to_js(esm.program().unwrap()),
            @"export {default as layout} from true;"
        );

        let estree = serde_json::to_value(esm.program().unwrap()).unwrap();
        assert_eq!(
            estree["body"][0]["source"],
            json!({ "type": "Literal", "value": true })
        );
    }
}
