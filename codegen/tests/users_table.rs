//! End-to-end parse and render of typical `SHOW CREATE TABLE` output

use sql2struct_codegen::{
    GenerateOptions, GoType, TableFilter, generate, parse_table, split_statements, table_name,
};

const USERS_DDL: &str = "CREATE TABLE `users` (
  `id` int(11) NOT NULL,
  `name` varchar(255) NOT NULL COMMENT 'user name',
  PRIMARY KEY (`id`)
) ENGINE=InnoDB COMMENT='user table'";

const DUMP: &str = r#"
-- MySQL dump
DROP TABLE IF EXISTS `user_info`;
CREATE TABLE `user_info` (
  `id` bigint(20) unsigned NOT NULL AUTO_INCREMENT,
  `user_id` bigint(20) NOT NULL COMMENT 'owner',
  `avatar_url` varchar(512) NOT NULL DEFAULT '' COMMENT 'avatar',
  `birthday` date DEFAULT NULL,
  `updated_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
  PRIMARY KEY (`id`),
  UNIQUE KEY `uk_user` (`user_id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='user profile';

CREATE TABLE `order_info` (
  `order_id` varchar(32) NOT NULL PRIMARY KEY,
  `paid` tinyint(1) NOT NULL DEFAULT '0'
) ENGINE=InnoDB;
"#;

#[test]
fn users_example() {
    let table = parse_table(USERS_DDL).unwrap();

    assert_eq!(table.name, "users");
    assert_eq!(table.comment.as_deref(), Some("user table"));
    assert_eq!(table.fields.len(), 2);

    assert_eq!(table.fields[0].name, "id");
    assert_eq!(table.fields[0].ty, GoType::Int64);
    assert!(table.fields[0].is_primary_key);

    assert_eq!(table.fields[1].name, "name");
    assert_eq!(table.fields[1].ty, GoType::String);
    assert_eq!(table.fields[1].comment.as_deref(), Some("user name"));
    assert!(!table.has_time_field);

    let code = generate(&table, &GenerateOptions::default()).unwrap().code;
    let body: Vec<&str> = code
        .lines()
        .skip_while(|l| !l.starts_with("type Users struct {"))
        .skip(1)
        .take_while(|l| *l != "}")
        .collect();
    assert_eq!(body.len(), 2);
    assert!(body[0].trim_start().starts_with("ID "));
    assert!(body[1].trim_start().starts_with("Name "));
    assert!(body[1].ends_with("// user name"));
}

#[test]
fn dump_with_initialisms_and_time() {
    let statements = split_statements(DUMP);
    let names: Vec<String> = statements.iter().map(|s| table_name(s).unwrap()).collect();
    assert_eq!(names, ["user_info", "order_info"]);

    let table = parse_table(statements[0]).unwrap();
    assert!(table.has_time_field);
    assert_eq!(table.field("avatar_url").unwrap().default.as_deref(), Some(""));

    let code = generate(&table, &GenerateOptions::default()).unwrap().code;
    assert!(code.contains("import \"time\""));
    assert!(code.contains("// UserInfo user profile\ntype UserInfo struct {"));
    assert!(code.contains("\tID "));
    assert!(code.contains("\tUserID "));
    assert!(code.contains("\tAvatarURL "));
    // empty defaults are left out of the tag
    assert!(code.contains("`gorm:\"column:avatar_url\" json:\"avatar_url\"`"));
    assert!(code.contains("\tBirthday  time.Time"));
    assert!(code.contains("func (t *UserInfo) TableName() string {\n\treturn \"user_info\"\n}"));

    let orders = parse_table(statements[1]).unwrap();
    let order_id = orders.field("order_id").unwrap();
    assert!(order_id.is_primary_key);
    assert_eq!(orders.field("paid").unwrap().default.as_deref(), Some("0"));
    assert!(orders.comment.is_none());

    let code = generate(&orders, &GenerateOptions::default()).unwrap().code;
    assert!(code.contains("// OrderInfo\ntype OrderInfo struct {"));
    assert!(code.contains("\tOrderID string `gorm:\"column:order_id;primary_key\" json:\"order_id\"`"));
}

#[test]
fn filter_then_generate() {
    let statements = split_statements(DUMP);
    let names: Vec<String> = statements.iter().map(|s| table_name(s).unwrap()).collect();

    let filter = TableFilter::new(["^user_"]).unwrap();
    assert_eq!(filter.filter(&names), ["user_info"]);

    let all = TableFilter::default();
    assert_eq!(all.filter(&names), names);
}

#[test]
fn generation_is_idempotent() {
    let table = parse_table(USERS_DDL).unwrap();
    let opts = GenerateOptions {
        with_json_tag: false,
        ..GenerateOptions::default()
    };
    let first = generate(&table, &opts).unwrap();
    let second = generate(&table, &opts).unwrap();
    assert_eq!(first.code.as_bytes(), second.code.as_bytes());
}
