use crate::class::{self, ClassifyOptions, Role, Visibility};
use crate::lex::{self, Token};
use crate::report;
use crate::scope;

fn tokens_of(input: &str) -> Vec<Token> {
    lex::tokenize(&lex::strip_comments(input))
}

mod lexing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn punctuation_is_isolated() {
        let tokens = lex::tokenize("class A { public: int foo(); };");
        assert_eq!(
            tokens,
            vec![
                Token::Word("class".into()),
                Token::Word("A".into()),
                Token::Open,
                Token::Word("public".into()),
                Token::Punct(':'),
                Token::Word("int".into()),
                Token::Word("foo".into()),
                Token::Punct('('),
                Token::Punct(')'),
                Token::Punct(';'),
                Token::Close,
                Token::Punct(';'),
            ]
        );
    }

    #[test]
    fn scope_resolution_stays_in_one_word() {
        let tokens = lex::tokenize("std::vector<int> v;");
        assert_eq!(
            tokens,
            vec![
                Token::Word("std::vector<int>".into()),
                Token::Word("v".into()),
                Token::Punct(';'),
            ]
        );
    }

    #[test]
    fn render_tightens_template_spacing() {
        let tokens = lex::tokenize("QMap < QString , int > m ;");
        assert_eq!(lex::render(&tokens), "QMap <QString , int> m ;");
    }

    #[test]
    fn render_attaches_pointer_star() {
        let tokens = lex::tokenize("int * p ;");
        assert_eq!(lex::render(&tokens), "int* p ;");
    }

    #[test]
    fn strip_comments_removes_all_three_kinds() {
        let input = "#include <vector>\n// note\nint a; /* gone */ int b;\n";
        let stripped = lex::strip_comments(input);
        assert!(!stripped.contains("include"));
        assert!(!stripped.contains("note"));
        assert!(!stripped.contains("gone"));
        assert!(stripped.contains("int a;"));
        assert!(stripped.contains("int b;"));
    }

    #[test]
    fn unterminated_block_comment_is_left_in_place() {
        let stripped = lex::strip_comments("int a; /* dangling");
        assert!(stripped.contains("/* dangling"));
        assert!(stripped.contains("int a;"));
    }
}

mod scoping {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// Leaf text concatenated in tree order reproduces the token stream
    /// with the brace tokens removed
    fn assert_structural_fidelity(input: &str) {
        let tokens = tokens_of(input);
        let root = scope::extract(&tokens);

        let without_braces: Vec<Token> = tokens
            .iter()
            .filter(|t| !matches!(t, Token::Open | Token::Close))
            .cloned()
            .collect();
        let expected = lex::render(&without_braces);

        let actual = root
            .leaf_texts()
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(actual, expected);
    }

    #[test_case("class A { public: int foo(); int bar; };")]
    #[test_case("a { b } c { d } e")]
    #[test_case("x { y { z } w } v")]
    #[test_case("no braces at all")]
    #[test_case("class C { public: int a;" ; "unterminated open")]
    fn structural_fidelity(input: &str) {
        assert_structural_fidelity(input);
    }

    #[test_case("class A { int x; };", 1)]
    #[test_case("class D { struct E { int z; }; int w; };", 2)]
    #[test_case("a { b } c { d { e } } f", 3)]
    fn container_count_matches_open_braces(input: &str, open_braces: usize) {
        let root = scope::extract(&tokens_of(input));
        assert_eq!(root.container_count(), open_braces);
    }

    #[test]
    fn sibling_scopes_land_next_to_their_leaves() {
        let root = scope::extract(&tokens_of("a { b } c { d } e"));
        let children = root.children().unwrap();
        assert_eq!(children.len(), 5);
        assert_eq!(children[0].leaf_text(), Some("a"));
        assert_eq!(children[1].children().unwrap()[0].leaf_text(), Some("b"));
        assert_eq!(children[2].leaf_text(), Some("c"));
        assert_eq!(children[3].children().unwrap()[0].leaf_text(), Some("d"));
        assert_eq!(children[4].leaf_text(), Some("e"));
    }

    #[test]
    fn paths_address_nodes_uniquely() {
        let root = scope::extract(&tokens_of("x { y { z } w } v"));
        let children = root.children().unwrap();
        assert_eq!(children[0].path().to_string(), "[0]");
        let outer = children[1].children().unwrap();
        assert_eq!(outer[0].path().to_string(), "[1.0]");
        assert_eq!(outer[1].path().to_string(), "[1.1]");
        assert_eq!(outer[1].children().unwrap()[0].path().to_string(), "[1.1.0]");
        assert_eq!(outer[2].path().to_string(), "[1.2]");
    }

    #[test]
    fn excess_closing_braces_do_not_panic() {
        let root = scope::extract(&tokens_of("} } class X { int a; }"));
        // best-effort partial structure, still a tree
        assert!(root.children().is_some());
    }
}

mod locating {
    use super::*;
    use pretty_assertions::assert_eq;

    fn locate(input: &str) -> Vec<class::ClassEntry> {
        class::locate(&scope::extract(&tokens_of(input)))
    }

    #[test]
    fn pairs_name_with_flattened_body() {
        let entries = locate("class D { struct E { int z; }; int w; };");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "D");
        // nested scope contents are flattened away
        assert_eq!(entries[0].body, "struct E;; int w ;");
    }

    #[test]
    fn base_class_list_is_stripped_from_the_name() {
        let entries = locate("class Derived : public Base { int x; };");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Derived");
    }

    #[test]
    fn scope_resolution_does_not_cut_the_name() {
        let entries = locate("class ns::Wide { int x; };");
        assert_eq!(entries[0].name, "ns::Wide");
    }

    #[test]
    fn namespace_wrapper_collapses_to_the_inner_class() {
        let entries = locate("namespace N { class A { int x; }; }");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "A");
        assert_eq!(entries[0].body, "int x ;");
    }

    #[test]
    fn anonymous_scope_is_silently_skipped() {
        let entries = locate("namespace { int x; } class B { };");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "B");
    }

    #[test]
    fn duplicate_class_names_keep_position_take_last_body() {
        let entries = locate("class A { int x; }; class A { int y; };");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, "int y ;");
    }

    #[test]
    fn input_without_classes_yields_nothing() {
        assert!(locate("int a; void f();").is_empty());
        assert!(locate("").is_empty());
    }
}

mod classifying {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn classify(body: &str) -> Vec<class::Declaration> {
        class::classify(body, &ClassifyOptions::default())
    }

    #[test]
    fn visibility_carries_until_the_next_marker() {
        let decls = classify("public : int foo ( ) ; int bar");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].visibility, Visibility::Public);
        assert_eq!(decls[0].role, Role::Method);
        assert_eq!(decls[0].name, "foo()");
        assert_eq!(decls[1].visibility, Visibility::Public);
        assert_eq!(decls[1].role, Role::Field);
        assert_eq!(decls[1].name, "bar");
        assert_eq!(decls[1].type_name, "int");
    }

    #[test]
    fn initial_state_is_private() {
        let decls = classify("int hidden");
        assert_eq!(decls[0].visibility, Visibility::Private);
    }

    #[test_case("public", Visibility::Public)]
    #[test_case("signals", Visibility::Signal)]
    #[test_case("protected", Visibility::Protected)]
    #[test_case("private", Visibility::Private)]
    #[test_case("internal", Visibility::Private ; "unrecognized keyword defaults to private")]
    fn section_keywords_map_totally(keyword: &str, expected: Visibility) {
        let decls = classify(&format!("{keyword} : int x"));
        assert_eq!(decls[0].visibility, expected);
    }

    #[test]
    fn constructor_has_empty_type() {
        let decls = classify("public : MyClass ( int a )");
        assert_eq!(decls[0].role, Role::Method);
        assert_eq!(decls[0].name, "MyClass(int a)");
        assert_eq!(decls[0].type_name, "");
    }

    #[test]
    fn parameter_spacing_is_normalized() {
        let decls = classify("void run ( int x , int y )");
        assert_eq!(decls[0].name, "run(int x, int y)");
        assert_eq!(decls[0].type_name, "void");
    }

    #[test]
    fn qualifiers_are_removed() {
        let decls = classify("virtual void run ( ) const");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "run()");
        assert_eq!(decls[0].type_name, "void");
    }

    #[test]
    fn typedefs_are_dropped_entirely() {
        let decls = classify("typedef int myint ; int a");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "a");
    }

    #[test]
    fn default_initializers_are_dropped() {
        let decls = classify("int x = 5 ; int y");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].name, "x");
        assert_eq!(decls[0].type_name, "int");
    }

    #[test]
    fn custom_qualifier_set_is_honored() {
        let options = ClassifyOptions {
            qualifiers: vec!["MY_EXPORT".to_string()],
        };
        let decls = class::classify("MY_EXPORT int x", &options);
        assert_eq!(decls[0].name, "x");
        assert_eq!(decls[0].type_name, "int");
    }

    #[test]
    fn qt_slots_section_falls_back_to_its_access_keyword() {
        // "public slots :" loses the slots keyword, leaving "public :"
        let decls = classify("public slots : void onClick ( )");
        assert_eq!(decls[0].visibility, Visibility::Public);
        assert_eq!(decls[0].name, "onClick()");
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert!(classify("").is_empty());
        assert!(classify(" ; ; ").is_empty());
    }
}

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_report_frames_fields_then_methods() {
        let summaries = class::parse("class A { public: int foo(); int bar; };");
        let report = report::render_text(&summaries);
        let separator = "-".repeat(40);
        let expected = format!("{separator}\nA\n{separator}\n+bar: int\n{separator}\n+foo(): int\n{separator}\n");
        assert_eq!(report, expected);
    }

    #[test]
    fn html_report_escapes_the_embedded_source() {
        let source = "class A { QList<int> xs; };";
        let summaries = class::parse(source);
        let page = report::render_html(source, &summaries);
        assert!(page.contains("&lt;int&gt;"));
        assert!(page.contains("<textarea name=\"source\""));
        assert!(page.contains("<textarea name=\"summary\""));
        assert!(!page.contains("QList<int>"));
    }

    #[test]
    fn visibility_markers() {
        assert_eq!(Visibility::Public.marker(), '+');
        assert_eq!(Visibility::Signal.marker(), '<');
        assert_eq!(Visibility::Protected.marker(), '#');
        assert_eq!(Visibility::Private.marker(), '-');
    }
}
