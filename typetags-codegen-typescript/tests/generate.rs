//! End-to-end generation tests: schema text in, artifact text out.

use typetags_codegen::FileMap;
use typetags_codegen_typescript::{GenerateOptions, Generator};
use typetags_schema::Schema;

fn generate(schema_text: &str, options: GenerateOptions) -> FileMap {
    let schema = Schema::parse(schema_text);
    Generator::new(&schema, options).generate()
}

const BLOG: &str = r#"
model User {
  id    String @id
  name  String?
  role  Role
  posts Post[]
}

model Post {
  id     String @id
  tags   String[]
  author User
}

enum Role {
  ADMIN
  USER
}
"#;

#[test]
fn single_file_snapshot() {
    let files = generate(BLOG, GenerateOptions::default());
    insta::assert_snapshot!(files.get("models.ts").unwrap(), @r#"
    // Generated by typetags from a Prisma schema. Do not edit.

    export type DateTimeString = string;
    export type JsonValue = any;

    export type Role = "ADMIN" | "USER";

    export interface User {
      id: string;
      name: string | null;
      role: Role;
      posts: Post[] | null;
    }

    export interface Post {
      id: string;
      tags: string[];
      author: User | null;
    }
    "#);
}

#[test]
fn flat_interfaces_omit_relations() {
    let options = GenerateOptions {
        generate_flat: true,
        ..Default::default()
    };
    let files = generate(BLOG, options);
    let content = files.get("models.ts").unwrap();

    let flat = content.split("export interface PostFlat {").nth(1).unwrap();
    let body = flat.split('}').next().unwrap();
    assert!(body.contains("id: string;"));
    assert!(body.contains("tags: string[];"));
    assert!(!body.contains("author"));
}

#[test]
fn declared_names_appear_exactly_once_in_order() {
    let files = generate(BLOG, GenerateOptions::default());
    let content = files.get("models.ts").unwrap();

    let interfaces: Vec<&str> = content
        .lines()
        .filter_map(|line| line.strip_prefix("export interface "))
        .filter_map(|rest| rest.split_whitespace().next())
        .collect();
    assert_eq!(interfaces, ["User", "Post"]);

    let unions: Vec<&str> = content
        .lines()
        .filter_map(|line| line.strip_prefix("export type "))
        .filter_map(|rest| rest.split_whitespace().next())
        .filter(|name| !["DateTimeString", "JsonValue"].contains(name))
        .collect();
    assert_eq!(unions, ["Role"]);
}

#[test]
fn generation_is_idempotent() {
    for options in [
        GenerateOptions::default(),
        GenerateOptions {
            split_by_schema: true,
            generate_flat: true,
            generate_index: true,
        },
    ] {
        let first = generate(BLOG, options);
        let second = generate(BLOG, options);
        assert_eq!(first, second);
    }
}

#[test]
fn duplicate_model_reflects_second_declaration() {
    let files = generate(
        "model A {\n  x Int\n}\nmodel A {\n  y String\n}",
        GenerateOptions::default(),
    );
    let content = files.get("models.ts").unwrap();

    assert_eq!(content.matches("export interface A ").count(), 1);
    assert!(content.contains("y: string;"));
    assert!(!content.contains("x: number;"));
}

#[test]
fn unknown_type_is_verbatim_nested_and_any_flat() {
    let options = GenerateOptions {
        generate_flat: true,
        ..Default::default()
    };
    let files = generate(
        "model M {\n  payload Unsupported\n  id String\n}",
        options,
    );
    let content = files.get("models.ts").unwrap();

    let full = content.split("export interface M ").nth(1).unwrap();
    let full_body = full.split('}').next().unwrap();
    assert!(full_body.contains("payload: Unsupported;"));

    let flat = content.split("export interface MFlat ").nth(1).unwrap();
    let flat_body = flat.split('}').next().unwrap();
    assert!(flat_body.contains("payload: any;"));
}

#[test]
fn empty_enum_declares_nothing_anywhere() {
    for options in [
        GenerateOptions::default(),
        GenerateOptions {
            split_by_schema: true,
            generate_index: true,
            ..Default::default()
        },
    ] {
        let files = generate("enum Empty {\n}\nmodel M {\n  id String\n}", options);
        for (_, content) in files.iter() {
            assert!(!content.contains("export type Empty"));
        }
    }
}

#[test]
fn split_mode_resolves_cross_partition_imports() {
    let options = GenerateOptions {
        split_by_schema: true,
        ..Default::default()
    };
    let files = generate(
        "model A {\n  b B\n  @@schema(\"x\")\n}\nmodel B {\n  id String\n  @@schema(\"y\")\n}",
        options,
    );

    let x = files.get("x/models.ts").unwrap();
    assert!(x.contains("import type { B } from \"../y/models\";"));

    let y = files.get("y/models.ts").unwrap();
    assert!(!y.contains("import type { A }"));
    assert!(!y.contains("../x/models"));
}

#[test]
fn split_partition_snapshot() {
    let options = GenerateOptions {
        split_by_schema: true,
        ..Default::default()
    };
    let files = generate(
        "model A {\n  when DateTime\n  role Role\n  b B\n  @@schema(\"x\")\n}\n\
         model B {\n  id String\n  @@schema(\"y\")\n}\n\
         enum Role {\n  ADMIN\n}",
        options,
    );
    insta::assert_snapshot!(files.get("x/models.ts").unwrap(), @r#"
    // Generated by typetags. Types for schema "x".
    import type { DateTimeString, JsonValue } from "../common/base";
    import type { Role } from "../common/enums";
    import type { B } from "../y/models";

    export interface A {
      when: DateTimeString;
      role: Role;
      b: B | null;
    }
    "#);
}

#[test]
fn garbage_input_still_generates() {
    for garbage in ["", "}{", "model", "model X {\n  ???\n", "\u{7f}\u{80}"] {
        for options in [
            GenerateOptions::default(),
            GenerateOptions {
                split_by_schema: true,
                generate_flat: true,
                generate_index: true,
            },
        ] {
            // Must not panic; a degenerate map is fine.
            let files = generate(garbage, options);
            if options.split_by_schema {
                assert!(files.contains("common/base.ts"));
            } else {
                assert!(files.contains("models.ts"));
            }
        }
    }
}
