//! Flutter Bundle - Icon-Font Bindings
//!
//! A generated data class with one `IconData` constant per icon, plus the
//! packaging manifest. The compiled font file itself is copied under
//! `fonts/` by the pipeline; rendering here stays pure.

use heck::ToSnakeCase;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::naming::{capitalized, NamingPolicy};
use crate::registry::{IconEntry, IconRegistry};

use super::{resolve_identifiers, EmitError, EmittedFile, Emitter};

const SUBTREE: &str = "flutter";

/// Relative path of the bundled font file inside the Flutter subtree.
pub fn font_asset_path(config: &BuildConfig) -> PathBuf {
    PathBuf::from(SUBTREE)
        .join("fonts")
        .join(format!("{}.ttf", capitalized(&config.font_name)))
}

pub struct FlutterEmitter;

impl Emitter for FlutterEmitter {
    fn target(&self) -> &'static str {
        "flutter"
    }

    fn emit(
        &self,
        registry: &IconRegistry,
        config: &BuildConfig,
    ) -> Result<Vec<EmittedFile>, EmitError> {
        let policy = NamingPolicy::flutter(&config.font_name);
        let resolved = resolve_identifiers(registry, &policy)?;

        Ok(vec![
            EmittedFile::new(
                PathBuf::from(SUBTREE)
                    .join(format!("{}_icons.dart", config.font_name.to_snake_case())),
                class_source(&resolved, config),
            ),
            EmittedFile::new(
                PathBuf::from(SUBTREE).join("pubspec.yaml"),
                pubspec_source(config),
            ),
        ])
    }
}

fn class_source(resolved: &[(&IconEntry, String)], config: &BuildConfig) -> String {
    let class_name = format!("{}Icons", capitalized(&config.font_name));
    let family = capitalized(&config.font_name);

    let mut out = format!(
        "import 'package:flutter/widgets.dart';\n\
         \n\
         class {class_name} {{\n\
         {i}{class_name}._();\n\
         \n\
         {i}static const String _fontFamily = '{family}';\n\
         \n",
        i = "  ",
    );
    for (entry, identifier) in resolved {
        out.push_str(&format!(
            "  static const IconData {identifier} = IconData(0x{code_point:04x}, fontFamily: _fontFamily);\n",
            code_point = entry.code_point,
        ));
    }
    out.push_str("}\n");
    out
}

fn pubspec_source(config: &BuildConfig) -> String {
    let package = format!("{}_icons", config.font_name.to_snake_case());
    let family = capitalized(&config.font_name);

    format!(
        "name: {package}\n\
         description: Generated icon font bindings for {family}.\n\
         version: 1.0.0\n\
         \n\
         environment:\n\
         {i}sdk: \">=2.17.0 <4.0.0\"\n\
         \n\
         flutter:\n\
         {i}fonts:\n\
         {i}{i}- family: {family}\n\
         {i}{i}{i}fonts:\n\
         {i}{i}{i}{i}- asset: fonts/{family}.ttf\n",
        i = "  ",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_support::registry_from;

    #[test]
    fn data_class_embeds_hex_code_points() {
        let (registry, config) = registry_from(
            &[("arrow-left", r#"<path d="M0 0"/>"#), ("home", r#"<path d="M1 1"/>"#)],
            "myfont",
        );
        let files = FlutterEmitter.emit(&registry, &config).unwrap();
        assert_eq!(files[0].path.to_str(), Some("flutter/myfont_icons.dart"));
        let class = &files[0].contents;
        assert!(class.contains("class MyfontIcons {"));
        assert!(class.contains(
            "static const IconData arrowLeft = IconData(0xe001, fontFamily: _fontFamily);"
        ));
        assert!(class.contains(
            "static const IconData home = IconData(0xe002, fontFamily: _fontFamily);"
        ));
    }

    #[test]
    fn dart_keyword_identifier_is_disambiguated() {
        let (registry, config) = registry_from(&[("switch", r#"<path d="M0 0"/>"#)], "myfont");
        let files = FlutterEmitter.emit(&registry, &config).unwrap();
        assert!(files[0]
            .contents
            .contains("static const IconData switchMyfont = IconData(0xe001"));
    }

    #[test]
    fn pubspec_declares_family_and_asset() {
        let (registry, config) = registry_from(&[("home", r#"<path d="M1 1"/>"#)], "myfont");
        let files = FlutterEmitter.emit(&registry, &config).unwrap();
        let pubspec = &files[1].contents;
        assert!(pubspec.starts_with("name: myfont_icons\n"));
        assert!(pubspec.contains("- family: Myfont\n"));
        assert!(pubspec.contains("- asset: fonts/Myfont.ttf\n"));
    }

    #[test]
    fn font_asset_path_is_inside_flutter_subtree() {
        let (_registry, config) = registry_from(&[], "myfont");
        assert_eq!(
            font_asset_path(&config).to_str(),
            Some("flutter/fonts/Myfont.ttf")
        );
    }
}
