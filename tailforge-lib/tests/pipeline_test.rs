use pretty_assertions::assert_eq;
use tailforge_lib::parser::blocks::split_into_blocks;
use tailforge_lib::parser::declarations::extract_declarations;
use tailforge_lib::parser::name::extract_component_name;
use tailforge_lib::{process_stylesheet, TranslateError};

const BUTTON_CSS: &str = r#"/* PrimaryButton */
.primary-button {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 12px 24px;
  background-color: #3b82f6;
  color: white;
  border-radius: 6px;
  font-weight: 500;
}
"#;

#[test]
fn button_fixture_end_to_end() {
    let descriptor = process_stylesheet(BUTTON_CSS).unwrap();

    assert_eq!(descriptor.name, "PrimaryButton");
    assert_eq!(
        descriptor.class_string,
        "flex items-center justify-center p-3 bg-gray-100 text-white rounded-md font-medium"
    );
    assert_eq!(descriptor.stats.declaration_count, 8);
    assert!(descriptor.styled_css.starts_with(".primarybutton {"));
    assert!(descriptor
        .component_code
        .contains("const PrimaryButton = ({ children, className }"));
}

#[test]
fn btn_example_from_selector_rule() {
    let descriptor =
        process_stylesheet(".btn { display: flex; padding: 16px; border-radius: 8px; }").unwrap();

    assert_eq!(descriptor.name, "btn");
    let classes: Vec<&str> = descriptor.class_string.split_whitespace().collect();
    assert!(classes.contains(&"flex"));
    assert!(classes.contains(&"p-4"));
    assert!(classes.contains(&"rounded-md"));
}

#[test]
fn comment_name_beats_selector_name() {
    let css = "/* CardHeader */\n.card-header {\n  display: flex;\n}";
    assert_eq!(extract_component_name(css), "CardHeader");

    let descriptor = process_stylesheet(css).unwrap();
    assert_eq!(descriptor.name, "CardHeader");
}

#[test]
fn blank_input_fails_with_empty_input() {
    assert_eq!(process_stylesheet("").unwrap_err(), TranslateError::EmptyInput);
    assert_eq!(
        process_stylesheet("   \n\t ").unwrap_err(),
        TranslateError::EmptyInput
    );
}

#[test]
fn braceless_input_fails_with_no_declaration_block() {
    assert_eq!(split_into_blocks("color: red;").count(), 0);
    assert_eq!(
        process_stylesheet("color: red;").unwrap_err(),
        TranslateError::NoDeclarationBlock
    );
}

#[test]
fn every_emitted_block_is_brace_balanced() {
    let css = r#"
.header { display: flex; }
@media (min-width: 640px) {
  .header { padding: 8px; }
}
.footer {
  margin: 4px;
}
"#;
    let blocks: Vec<String> = split_into_blocks(css).collect();
    assert_eq!(blocks.len(), 3);
    for block in &blocks {
        let opens = block.matches('{').count();
        let closes = block.matches('}').count();
        assert_eq!(opens, closes, "unbalanced block: {}", block);
        assert!(opens >= 1);
    }
}

#[test]
fn first_block_drives_the_descriptor() {
    let css = r#"
.first { display: flex; }
.second { display: block; }
"#;
    let descriptor = process_stylesheet(css).unwrap();
    assert_eq!(descriptor.class_string, "flex");
}

#[test]
fn declaration_count_always_matches_map_size() {
    let css = ".x { display: flex; unknown-prop: whatever; color: red; }";
    let descriptor = process_stylesheet(css).unwrap();
    // Untranslatable declarations still count; they just emit no classes.
    assert_eq!(descriptor.stats.declaration_count, 3);
}

#[test]
fn declaration_extraction_round_trips_through_styled_css() {
    let css = ".chip {\n  display: flex;\n  gap: 8px;\n  color: #333333;\n}";
    let block = split_into_blocks(css).next().unwrap();
    let first = extract_declarations(&block);
    let descriptor = process_stylesheet(css).unwrap();
    let second = extract_declarations(&descriptor.styled_css);
    assert_eq!(first, second);
}

#[test]
fn translation_never_fails_on_unrecognized_declarations() {
    let descriptor =
        process_stylesheet(".odd { cursor: pointer; transition: all 0.2s; }").unwrap();
    assert_eq!(descriptor.class_string, "");
    assert_eq!(descriptor.stats.declaration_count, 2);
}
