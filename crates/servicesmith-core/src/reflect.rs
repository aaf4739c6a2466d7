//! Trait signature extraction and type-expression decoding.
//!
//! [`trait_methods`] parses a Rust source file and returns the raw method
//! nodes of one named top-level trait, in declaration order. [`decode_type`]
//! turns a parsed type expression back into its source-level text. Decoding
//! is purely syntactic: it never resolves what a path refers to, and an
//! expression shape it does not understand yields a diagnostic placeholder
//! instead of an error, so one exotic parameter cannot block generation of
//! the rest of the file.

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use syn::{GenericArgument, Item, PathArguments, TraitItem, TraitItemFn, Type};
use tokio::fs;

use crate::error::{Error, Result};

/// Parse `path` and collect the methods of the top-level trait named
/// `trait_name`, in declaration order. A file without a matching trait
/// yields an empty list, not an error; only an unreadable or unparsable
/// file fails.
pub async fn trait_methods(path: &Path, trait_name: &str) -> Result<Vec<TraitItemFn>> {
    let source = fs::read_to_string(path)
        .await
        .map_err(|e| Error::parse(format!("cannot read {}: {}", path.display(), e)))?;

    let file = syn::parse_file(&source)
        .map_err(|e| Error::parse(format!("{}: {}", path.display(), e)))?;

    let mut methods = Vec::new();
    for item in file.items {
        let Item::Trait(item_trait) = item else {
            continue;
        };
        if item_trait.ident != trait_name {
            continue;
        }
        for trait_item in item_trait.items {
            if let TraitItem::Fn(f) = trait_item {
                methods.push(f);
            }
        }
    }

    log::debug!(
        "extracted {} method(s) for trait `{}` from {}",
        methods.len(),
        trait_name,
        path.display()
    );
    Ok(methods)
}

/// Decode a type expression into its textual source form.
///
/// Handles paths (plain, qualified and generic), references, slices, raw
/// pointers and tuples recursively. Anything else becomes a
/// `<unsupported type: ..>` placeholder naming the node kind.
pub fn decode_type(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => decode_path(&type_path.path),
        Type::Reference(reference) => {
            let mut out = String::from("&");
            if let Some(lifetime) = &reference.lifetime {
                out.push_str(&lifetime.to_string());
                out.push(' ');
            }
            if reference.mutability.is_some() {
                out.push_str("mut ");
            }
            out.push_str(&decode_type(&reference.elem));
            out
        }
        Type::Slice(slice) => format!("[{}]", decode_type(&slice.elem)),
        Type::Ptr(ptr) => {
            let qualifier = if ptr.mutability.is_some() { "mut" } else { "const" };
            format!("*{} {}", qualifier, decode_type(&ptr.elem))
        }
        Type::Tuple(tuple) => {
            let elems: Vec<String> = tuple.elems.iter().map(decode_type).collect();
            format!("({})", elems.join(", "))
        }
        other => unsupported(type_kind(other)),
    }
}

fn decode_path(path: &syn::Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (i, segment) in path.segments.iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
        match &segment.arguments {
            PathArguments::None => {}
            PathArguments::AngleBracketed(args) => {
                let rendered: Vec<String> =
                    args.args.iter().map(decode_generic_argument).collect();
                out.push('<');
                out.push_str(&rendered.join(", "));
                out.push('>');
            }
            PathArguments::Parenthesized(_) => {
                return unsupported("ParenthesizedGenericArguments");
            }
        }
    }
    out
}

fn decode_generic_argument(arg: &GenericArgument) -> String {
    match arg {
        GenericArgument::Type(ty) => decode_type(ty),
        GenericArgument::Lifetime(lifetime) => lifetime.to_string(),
        _ => unsupported("GenericArgument"),
    }
}

fn unsupported(kind: &str) -> String {
    format!("<unsupported type: {}>", kind)
}

fn type_kind(ty: &Type) -> &'static str {
    match ty {
        Type::Array(_) => "Array",
        Type::BareFn(_) => "BareFn",
        Type::Group(_) => "Group",
        Type::ImplTrait(_) => "ImplTrait",
        Type::Infer(_) => "Infer",
        Type::Macro(_) => "Macro",
        Type::Never(_) => "Never",
        Type::Paren(_) => "Paren",
        Type::TraitObject(_) => "TraitObject",
        Type::Verbatim(_) => "Verbatim",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn decode(src: &str) -> String {
        decode_type(&syn::parse_str::<Type>(src).unwrap())
    }

    #[test]
    fn test_decode_plain_and_qualified() {
        assert_eq!(decode("String"), "String");
        assert_eq!(decode("pkg::T"), "pkg::T");
        assert_eq!(decode("std::io::Error"), "std::io::Error");
    }

    #[test]
    fn test_decode_reference_slice_pointer() {
        assert_eq!(decode("&[pkg::T]"), "&[pkg::T]");
        assert_eq!(decode("&mut Vec<String>"), "&mut Vec<String>");
        assert_eq!(decode("*const u8"), "*const u8");
        assert_eq!(decode("*mut u8"), "*mut u8");
        assert_eq!(decode("&'a str"), "&'a str");
    }

    #[test]
    fn test_decode_generics_and_tuples() {
        assert_eq!(decode("Result<String, Error>"), "Result<String, Error>");
        assert_eq!(decode("Option<&[u8]>"), "Option<&[u8]>");
        assert_eq!(decode("(bool, anyhow::Result<()>)"), "(bool, anyhow::Result<()>)");
    }

    #[test]
    fn test_decode_is_idempotent_on_its_own_output() {
        let first = decode("&[pkg::T]");
        assert_eq!(decode(&first), first);
    }

    #[test]
    fn test_decode_unsupported_yields_placeholder() {
        let decoded = decode("fn(i32) -> i32");
        assert_eq!(decoded, "<unsupported type: BareFn>");
        let decoded = decode("dyn Iterator<Item = u8>");
        assert!(decoded.starts_with("<unsupported type:"));
    }

    #[tokio::test]
    async fn test_trait_methods_in_declaration_order() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("store.rs");
        tokio::fs::write(
            &src,
            r#"
            pub trait Store {
                fn get(&self, id: String) -> Result<String, Error>;
                fn put(&self, id: String, value: String) -> Result<(), Error>;
                fn close(&self) -> Result<(), Error>;
            }
            "#,
        )
        .await
        .unwrap();

        let methods = trait_methods(&src, "Store").await.unwrap();
        let names: Vec<String> = methods.iter().map(|m| m.sig.ident.to_string()).collect();
        assert_eq!(names, vec!["get", "put", "close"]);
    }

    #[tokio::test]
    async fn test_missing_trait_yields_empty_list() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("other.rs");
        tokio::fs::write(&src, "pub trait Other { fn a(&self); }")
            .await
            .unwrap();

        let methods = trait_methods(&src, "Store").await.unwrap();
        assert!(methods.is_empty());
    }

    #[tokio::test]
    async fn test_unparsable_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("broken.rs");
        tokio::fs::write(&src, "pub trait Store { fn ").await.unwrap();

        let err = trait_methods(&src, "Store").await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
