use super::*;
use serde_json::json;
use strum::IntoEnumIterator;

#[test]
fn test_every_builtin_has_an_extractor() {
    let registry = ArgExtractorRegistry::with_builtins();
    for tool in BuiltinTool::iter() {
        assert!(registry.contains(tool.name()), "missing extractor for {tool}");
    }
}

fn shout(args: &ArgMap<'_>, _mode: ParseMode) -> Option<NativeArgs> {
    args.string("text")
        .map(|t| NativeArgs::Custom(json!({"text": t.to_uppercase()})))
}

#[test]
fn test_third_party_registration() {
    let mut registry = ArgExtractorRegistry::new();
    registry.register("shout", shout);
    let extractor = registry.get("shout").unwrap();
    let value = json!({"text": "hi"});
    let args = ArgMap::from_value(&value).unwrap();
    assert_eq!(
        extractor(&args, ParseMode::Final),
        Some(NativeArgs::Custom(json!({"text": "HI"})))
    );
    assert!(registry.get("whisper").is_none());
}
