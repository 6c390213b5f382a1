use assetprep::models::TocEntry;
use assetprep::services::copy::{copy_tree, CopyOptions};
use assetprep::services::extensions::lowercase_extensions;
use assetprep::services::search::build_search_index;
use assetprep::services::slug::EmptySlugFallback;
use assetprep::services::snippets::{collect_dir, collect_page, render_section, SnippetOptions};
use assetprep::services::toc::generate_toc;
use assetprep::services::write_json;
use assetprep::AssetError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, contents).expect("Failed to write file");
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("Bad entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

mod copy_integration_tests {
    use super::*;

    fn source_tree() -> TempDir {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let root = tmp.path();
        touch(&root.join("Jame").join("Foto 1.JPG"), "first");
        touch(&root.join("Jame").join("foto_1.jpg"), "second");
        touch(&root.join("Jame").join("Črna Koča.png"), "koca");
        touch(&root.join("Jame").join("notes"), "notes");
        touch(&root.join("Druga Stran").join("a.jpg"), "a");
        tmp
    }

    #[test]
    fn test_copy_renames_files_and_dirs() {
        let src = source_tree();
        let out = TempDir::new().expect("Failed to create temp dir");
        let dest = out.path().join("copied");

        let options = CopyOptions {
            rename_dirs: true,
            ..CopyOptions::default()
        };
        let report = copy_tree(src.path(), &dest, &options).expect("Copy failed");

        assert_eq!(report.files_copied, 5);
        assert_eq!(file_names(&dest), vec!["druga_stran", "jame"]);
        assert_eq!(
            file_names(&dest.join("jame")),
            vec!["crna_koca.png", "foto_1.JPG", "foto_1_1.jpg", "notes"]
        );
        assert_eq!(
            fs::read_to_string(dest.join("jame").join("foto_1.JPG")).unwrap(),
            "first"
        );
        assert_eq!(
            fs::read_to_string(dest.join("jame").join("foto_1_1.jpg")).unwrap(),
            "second"
        );
        assert!(dest.join("druga_stran").join("a.jpg").is_file());
    }

    #[test]
    fn test_copy_keeps_dir_names_by_default() {
        let src = source_tree();
        let out = TempDir::new().expect("Failed to create temp dir");
        let dest = out.path().join("copied");

        copy_tree(src.path(), &dest, &CopyOptions::default()).expect("Copy failed");

        assert_eq!(file_names(&dest), vec!["Druga Stran", "Jame"]);
    }

    #[test]
    fn test_copy_lowercases_extensions_when_asked() {
        let src = source_tree();
        let out = TempDir::new().expect("Failed to create temp dir");
        let dest = out.path().join("copied");

        let options = CopyOptions {
            lowercase_extensions: true,
            ..CopyOptions::default()
        };
        copy_tree(src.path(), &dest, &options).expect("Copy failed");

        assert_eq!(
            file_names(&dest.join("Jame")),
            vec!["crna_koca.png", "foto_1.jpg", "foto_1_1.jpg", "notes"]
        );
    }

    #[test]
    fn test_copy_applies_fallback_to_empty_stems() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        touch(&tmp.path().join("src").join("###.jpg"), "x");
        touch(&tmp.path().join("src").join("???.jpg"), "y");
        let dest = tmp.path().join("dest");

        let options = CopyOptions {
            fallback: EmptySlugFallback::Positional {
                prefix: "image".to_string(),
            },
            ..CopyOptions::default()
        };
        let report = copy_tree(&tmp.path().join("src"), &dest, &options).expect("Copy failed");

        assert_eq!(report.empty_stems, 0);
        assert_eq!(file_names(&dest), vec!["image_1.jpg", "image_2.jpg"]);
    }

    #[test]
    fn test_copy_keeps_name_when_stem_is_empty() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        touch(&tmp.path().join("src").join("???"), "x");
        touch(&tmp.path().join("src").join("???.jpg"), "y");
        touch(&tmp.path().join("src").join("ok.jpg"), "z");
        let dest = tmp.path().join("dest");

        let report =
            copy_tree(&tmp.path().join("src"), &dest, &CopyOptions::default()).expect("Copy failed");

        assert_eq!(report.files_copied, 3);
        assert_eq!(report.empty_stems, 2);
        assert_eq!(file_names(&dest), vec!["???", "???.jpg", "ok.jpg"]);
        assert_eq!(fs::read_to_string(dest.join("???")).unwrap(), "x");
    }

    #[test]
    fn test_copy_file_never_lands_on_directory() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        touch(&tmp.path().join("src").join("a_b").join("x.jpg"), "inner");
        touch(&tmp.path().join("src").join("A B"), "outer");
        let dest = tmp.path().join("dest");

        let report =
            copy_tree(&tmp.path().join("src"), &dest, &CopyOptions::default()).expect("Copy failed");

        assert_eq!(report.files_copied, 2);
        assert_eq!(file_names(&dest), vec!["a_b", "a_b_1"]);
        assert!(dest.join("a_b").is_dir());
        assert_eq!(fs::read_to_string(dest.join("a_b").join("x.jpg")).unwrap(), "inner");
        assert_eq!(fs::read_to_string(dest.join("a_b_1")).unwrap(), "outer");
    }

    #[test]
    fn test_copy_dry_run_writes_nothing() {
        let src = source_tree();
        let out = TempDir::new().expect("Failed to create temp dir");
        let dest = out.path().join("copied");

        let options = CopyOptions {
            dry_run: true,
            ..CopyOptions::default()
        };
        let report = copy_tree(src.path(), &dest, &options).expect("Copy failed");

        assert_eq!(report.files_copied, 5);
        assert!(report.renamed > 0);
        assert!(!dest.exists());
    }

    #[test]
    fn test_copy_rejects_dest_inside_source() {
        let src = source_tree();
        let dest = src.path().join("Jame").join("out");

        let result = copy_tree(src.path(), &dest, &CopyOptions::default());

        assert!(matches!(
            result,
            Err(AssetError::DestinationInsideSource { .. })
        ));
    }

    #[test]
    fn test_copy_missing_source() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let result = copy_tree(
            &tmp.path().join("missing"),
            &tmp.path().join("dest"),
            &CopyOptions::default(),
        );
        assert!(matches!(result, Err(AssetError::NotADirectory(_))));
    }
}

mod extension_integration_tests {
    use super::*;

    #[test]
    fn test_lowercase_extensions_renames_uppercase_only() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let root = tmp.path();
        touch(&root.join("a.JPG"), "a");
        touch(&root.join("b.png"), "b");
        touch(&root.join("nested").join("C Photo.Png"), "c");
        touch(&root.join("README"), "readme");

        let report = lowercase_extensions(root, false).expect("Rename failed");

        assert_eq!(report.renamed.len(), 2);
        assert_eq!(file_names(root), vec!["README", "a.jpg", "b.png", "nested"]);
        assert_eq!(file_names(&root.join("nested")), vec!["C Photo.png"]);
    }

    #[test]
    fn test_lowercase_extensions_dry_run() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        touch(&tmp.path().join("a.JPG"), "a");

        let report = lowercase_extensions(tmp.path(), true).expect("Rename failed");

        assert_eq!(report.renamed.len(), 1);
        assert_eq!(file_names(tmp.path()), vec!["a.JPG"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_lowercase_extensions_skips_existing_target() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        touch(&tmp.path().join("d.JPG"), "upper");
        touch(&tmp.path().join("d.jpg"), "lower");

        let report = lowercase_extensions(tmp.path(), false).expect("Rename failed");

        assert!(report.renamed.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(
            fs::read_to_string(tmp.path().join("d.jpg")).unwrap(),
            "lower"
        );
    }
}

mod snippet_integration_tests {
    use super::*;

    fn page_tree() -> TempDir {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let page = tmp.path().join("klub");
        touch(&page.join("01 Kataster").join("20240101_Vhod v jamo.jpg"), "");
        touch(&page.join("01 Kataster").join("20240102_Vhod v jamo.JPG"), "");
        touch(&page.join("02 Etika").join("20240103_1 Kodeks.png"), "");
        touch(&page.join("02 Etika").join("20240104_Vhod v jamo.png"), "");
        tmp
    }

    fn options() -> SnippetOptions {
        SnippetOptions {
            stem_prefix_chars: 9,
            ..SnippetOptions::default()
        }
    }

    #[test]
    fn test_collect_page_sections_in_order() {
        let tmp = page_tree();
        let page = tmp.path().join("klub");
        let sections = vec![
            "02 Etika".to_string(),
            "01 Kataster".to_string(),
            "03 Missing".to_string(),
        ];

        let (found, missing) = collect_page(&page, &sections, &options()).expect("Collect failed");

        assert_eq!(missing, vec!["03 Missing".to_string()]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "02 Etika");

        let etika: Vec<&str> = found[0].imports.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(etika, vec!["img_1_kodeks", "vhod_v_jamo"]);

        let kataster: Vec<&str> = found[1].imports.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(kataster, vec!["vhod_v_jamo_1", "vhod_v_jamo_2"]);

        assert_eq!(found[1].imports[0].alt, "Vhod v jamo");
        assert_eq!(
            found[1].imports[0].relative_path,
            "01 Kataster/20240101_Vhod v jamo.jpg"
        );
    }

    #[test]
    fn test_collect_dir_renders_snippet() {
        let tmp = page_tree();
        let dir = tmp.path().join("klub").join("01 Kataster");

        let section = collect_dir(&dir, &options()).expect("Collect failed");
        let rendered = render_section(&section, "Image");

        assert_eq!(
            rendered,
            concat!(
                "import vhod_v_jamo from \"./01 Kataster/20240101_Vhod v jamo.jpg\"\n",
                "import vhod_v_jamo_1 from \"./01 Kataster/20240102_Vhod v jamo.JPG\"\n",
                "\n",
                "<Image src={vhod_v_jamo} alt=\"Vhod v jamo\" caption=\"\" />\n",
                "<Image src={vhod_v_jamo_1} alt=\"Vhod v jamo\" caption=\"\" />\n",
            )
        );
    }

    #[test]
    fn test_collect_page_missing_page() {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let result = collect_page(&tmp.path().join("nope"), &[], &options());
        assert!(matches!(result, Err(AssetError::NotADirectory(_))));
    }
}

mod page_integration_tests {
    use super::*;

    fn pages_tree() -> TempDir {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let root = tmp.path();
        touch(
            &root.join("alpha").join("page.mdx"),
            "import a from \"./01/a.jpg\"\n\n# Alpha\n\nIntro.\n\n## One\n\nFirst part.\n\n## Two\n\nSecond part.\n",
        );
        touch(&root.join("beta").join("notes.md"), "# Not a page\n");
        touch(&root.join("gamma").join("page.mdx"), "## Gamma\n\nOnly section.\n");
        tmp
    }

    #[test]
    fn test_generate_toc() {
        let tmp = pages_tree();

        let toc = generate_toc(tmp.path(), "page.mdx").expect("TOC failed");

        assert_eq!(toc.len(), 2);
        assert!(toc[0].file.ends_with("page.mdx"));
        let alpha: Vec<(u8, &str)> = toc[0]
            .headings
            .iter()
            .map(|h| (h.depth, h.value.as_str()))
            .collect();
        assert_eq!(alpha, vec![(1, "Alpha"), (2, "One"), (2, "Two")]);
        assert_eq!(toc[1].headings[0].value, "Gamma");
    }

    #[test]
    fn test_toc_written_as_json() {
        let tmp = pages_tree();
        let output = tmp.path().join("out").join("toc.json");

        let toc = generate_toc(tmp.path(), "page.mdx").expect("TOC failed");
        write_json(&output, &toc).expect("Write failed");

        let raw = fs::read_to_string(&output).expect("Missing output");
        assert!(raw.contains("\n  {"));
        let parsed: Vec<TocEntry> = serde_json::from_str(&raw).expect("Invalid JSON");
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_build_search_index() {
        let tmp = pages_tree();

        let index = build_search_index(tmp.path(), "page.mdx", "static_pages", 2)
            .expect("Index failed");

        assert_eq!(index.index_name, "static_pages");
        let ids: Vec<&str> = index.objects.iter().map(|o| o.object_id.as_str()).collect();
        assert_eq!(ids, vec!["alpha-0", "alpha-1", "alpha-2", "gamma-0"]);
        assert_eq!(index.objects[0].text, "# Alpha\nIntro.");
        assert_eq!(index.objects[1].text, "## One\nFirst part.");
        assert_eq!(index.objects[3].text, "## Gamma\nOnly section.");

        let json = serde_json::to_value(&index.objects[0]).unwrap();
        assert_eq!(json["objectID"], "alpha-0");
    }
}
