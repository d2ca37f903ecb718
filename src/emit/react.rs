//! React Bundle - Per-Icon Component Stubs
//!
//! One component file plus one type declaration per icon, and an index that
//! re-exports everything in registry order. Identifiers come from the shared
//! normalizer, so they agree with every other artifact by construction.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::naming::NamingPolicy;
use crate::registry::{IconEntry, IconRegistry};

use super::{js_string, resolve_identifiers, EmitError, EmittedFile, Emitter};

const SUBTREE: &str = "react";
const VIEW_BOX: &str = "0 0 1024 1024";

pub struct ReactEmitter;

impl Emitter for ReactEmitter {
    fn target(&self) -> &'static str {
        "react"
    }

    fn emit(
        &self,
        registry: &IconRegistry,
        config: &BuildConfig,
    ) -> Result<Vec<EmittedFile>, EmitError> {
        let policy = NamingPolicy::react(&config.font_name);
        let resolved = resolve_identifiers(registry, &policy)?;

        let mut files = Vec::with_capacity(resolved.len() * 2 + 2);
        for (entry, identifier) in &resolved {
            files.push(EmittedFile::new(
                PathBuf::from(SUBTREE).join(format!("{identifier}.js")),
                component_source(entry, identifier),
            ));
            files.push(EmittedFile::new(
                PathBuf::from(SUBTREE).join(format!("{identifier}.d.ts")),
                declaration_source(identifier),
            ));
        }
        files.push(EmittedFile::new(
            PathBuf::from(SUBTREE).join("index.js"),
            index_source(&resolved),
        ));
        files.push(EmittedFile::new(
            PathBuf::from(SUBTREE).join("index.d.ts"),
            index_source(&resolved),
        ));

        Ok(files)
    }
}

fn component_source(entry: &IconEntry, identifier: &str) -> String {
    let mut paths = String::new();
    for d in &entry.geometry {
        paths.push_str(&format!("  {},\n", js_string(d)));
    }

    format!(
        "import React from 'react';\n\
         \n\
         const paths = [\n\
         {paths}];\n\
         \n\
         const {identifier} = (props) =>\n\
         {indent}React.createElement(\n\
         {indent}{indent}'svg',\n\
         {indent}{indent}{{ viewBox: '{VIEW_BOX}', ...props }},\n\
         {indent}{indent}paths.map((d, i) => React.createElement('path', {{ d, key: i }}))\n\
         {indent});\n\
         \n\
         {identifier}.iconName = {name};\n\
         {identifier}.codePoint = 0x{code_point:04x};\n\
         \n\
         export default {identifier};\n",
        indent = "  ",
        name = js_string(&entry.name),
        code_point = entry.code_point,
    )
}

fn declaration_source(identifier: &str) -> String {
    format!(
        "import * as React from 'react';\n\
         \n\
         declare const {identifier}: React.FC<React.SVGProps<SVGSVGElement>> & {{\n\
         {indent}iconName: string;\n\
         {indent}codePoint: number;\n\
         }};\n\
         \n\
         export default {identifier};\n",
        indent = "  ",
    )
}

/// The same export list works as both `index.js` and `index.d.ts`.
fn index_source(resolved: &[(&IconEntry, String)]) -> String {
    let mut out = String::new();
    for (_, identifier) in resolved {
        out.push_str(&format!(
            "export {{ default as {identifier} }} from './{identifier}';\n"
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_support::registry_from;

    #[test]
    fn emits_two_files_per_icon_plus_index() {
        let (registry, config) = registry_from(
            &[("2fa", r#"<path d="M0 0"/>"#), ("home", r#"<path d="M1 1"/>"#)],
            "myfont",
        );
        let files = ReactEmitter.emit(&registry, &config).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.to_str().unwrap()).collect();
        assert_eq!(
            paths,
            [
                "react/Myfont2fa.js",
                "react/Myfont2fa.d.ts",
                "react/Home.js",
                "react/Home.d.ts",
                "react/index.js",
                "react/index.d.ts",
            ]
        );
    }

    #[test]
    fn component_embeds_geometry_and_code_point() {
        let (registry, config) = registry_from(&[("home", r#"<path d="M10 20h5"/>"#)], "myfont");
        let files = ReactEmitter.emit(&registry, &config).unwrap();
        let component = &files[0].contents;
        assert!(component.contains("const Home = (props) =>"));
        assert!(component.contains("'M10 20h5',"));
        assert!(component.contains("Home.codePoint = 0xe001;"));
        assert!(component.contains("export default Home;"));
    }

    #[test]
    fn index_matches_per_icon_identifiers() {
        let (registry, config) = registry_from(
            &[("react", r#"<path d="M0 0"/>"#)],
            "myfont",
        );
        let files = ReactEmitter.emit(&registry, &config).unwrap();
        let index = files
            .iter()
            .find(|f| f.path.ends_with("index.js"))
            .unwrap();
        assert_eq!(
            index.contents,
            "export { default as ReactMyfont } from './ReactMyfont';\n"
        );
    }
}
