use pretty_assertions::assert_eq;
use schemafix_core::{normalize, normalize_text, NamingRules, WordMatcher};

const SCHEMA: &str = r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model scm_production_orders {
  id                String                        @id @default(uuid())
  status            ad_status
  items             scm_production_order_items[]
  supplier          scm_suppliers?                @relation(fields: [supplier_id], references: [id])
  supplier_id       String?
}

model scm_production_order_items {
  id       String                 @id @default(uuid())
  order    scm_production_orders  @relation(fields: [order_id], references: [id])
  order_id String
  category mdm_item_categories?   @relation(fields: [category_id], references: [id])
  category_id String?
}

model scm_suppliers {
  id     String                  @id @default(uuid())
  orders scm_production_orders[]

  @@index([id])
}

model mdm_item_categories {
  id    String                       @id
  items scm_production_order_items[]
  @@map("item_categories")
}

model ad_status {
  id String @id
  production_orders scm_production_orders[]
}

model User {
  id String @id
}
"#;

const EXPECTED: &str = r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model ScmProductionOrder {
  id                String                        @id @default(uuid())
  status            AdStatus
  items             ScmProductionOrderItem[]
  supplier          ScmSupplier?                @relation(fields: [supplier_id], references: [id])
  supplier_id       String?
  @@map("scm_production_orders")
}

model ScmProductionOrderItem {
  id       String                 @id @default(uuid())
  order    ScmProductionOrder  @relation(fields: [order_id], references: [id])
  order_id String
  category MdmItemCategory?   @relation(fields: [category_id], references: [id])
  category_id String?
  @@map("scm_production_order_items")
}

model ScmSupplier {
  id     String                  @id @default(uuid())
  orders ScmProductionOrder[]

  @@index([id])
  @@map("scm_suppliers")
}

model MdmItemCategory {
  id    String                       @id
  items ScmProductionOrderItem[]
  @@map("item_categories")
}

model AdStatus {
  id String @id
  production_orders ScmProductionOrder[]
  @@map("ad_status")
}

model User {
  id String @id
}
"#;

#[test]
fn test_normalize_full_schema() {
    let res = normalize(SCHEMA, &NamingRules::default());
    assert_eq!(res.text, EXPECTED);
    assert_eq!(
        res.annotated,
        vec![
            "scm_production_orders",
            "scm_production_order_items",
            "scm_suppliers",
            "ad_status"
        ]
    );
    assert_eq!(res.already_mapped, vec!["mdm_item_categories"]);
    assert!(res.skipped.is_empty());
}

#[test]
fn test_rename_pass_runs_longest_first() {
    let res = normalize(SCHEMA, &NamingRules::default());
    let order: Vec<&str> = res.renames.iter().map(|r| r.raw.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "scm_production_order_items",
            "scm_production_orders",
            "mdm_item_categories",
            "scm_suppliers",
            "ad_status"
        ]
    );
}

#[test]
fn test_normalize_is_idempotent() {
    let rules = NamingRules::default();
    let once = normalize_text(SCHEMA, &rules);
    let twice = normalize(&once, &rules);
    assert_eq!(twice.text, once);
    assert!(!twice.changed());
}

#[test]
fn test_raw_names_only_remain_in_their_annotation() {
    let res = normalize(SCHEMA, &NamingRules::default());
    for raw in &res.annotated {
        let matcher = WordMatcher::new(raw.as_str());
        let annotation = format!("@@map(\"{}\")", raw);

        assert_eq!(res.text.matches(&annotation).count(), 1, "{}", raw);
        let without = res.text.replace(&annotation, "");
        assert!(!matcher.is_match(&without), "{} still present", raw);
    }
}

#[test]
fn test_custom_rules_are_injected() {
    let mut rules = NamingRules::empty();
    rules.prefixes.insert("scm".into(), "SCM".into());

    let src = "model scm_suppliers {\n  id Int\n}\n";
    assert_eq!(
        normalize_text(src, &rules),
        "model SCMSupplier {\n  id Int\n  @@map(\"scm_suppliers\")\n}\n"
    );
}
