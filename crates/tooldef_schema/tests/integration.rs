//! Integration tests for the `tooldef_schema` crate.

use serde_json::json;
use tooldef_schema::{
    Annotation, FunctionSignature, Generator, GeneratorConfig, HostType, Introspect,
    ParameterDescriptor, SchemaError, SignatureSet, TypeMap, describe, describe_methods,
    generate_tools, introspect, load_manifest,
};

// ─────────────────────────────────────────────────────────────────────
// Sample functions
// ─────────────────────────────────────────────────────────────────────

#[describe]
///
/// This function does something.
/// This is not relevant to the introspection.
fn sample_function(
    /// The first parameter
    param1: String,
    /// The second integer parameter
    param2: i32,
) {
    let _ = (param1, param2);
}

#[describe]
/// Adds two numbers.
/// Longer text.
fn add(
    /// first addend
    a: i64,
    /// second addend
    b: i64,
) -> String {
    (a + b).to_string()
}

#[describe]
/// Function 3 description.
fn function3(
    /// Description for param3
    param3: bool,
) -> &'static str {
    if param3 { "yes" } else { "no" }
}

#[describe]
fn function_no_docstring(
    /// The first parameter
    param1: String,
    /// The second parameter
    param2: String,
) {
    let _ = (param1, param2);
}

#[describe]
/// This function does something.
fn function_missing_description(param1: String, param2: f64) {
    let _ = (param1, param2);
}

#[describe]
///
fn blank_doc() {}

#[describe]
/// Counts things.
fn count_things(
    /// Things to count.
    things: Vec<String>,
) -> usize {
    things.len()
}

#[describe]
/// Parses a number.
fn parse_number(
    /// Digits to parse.
    digits: &str,
) -> Result<String, std::num::ParseIntError> {
    digits.parse::<i64>().map(|n| n.to_string())
}

// ─────────────────────────────────────────────────────────────────────
// 1. #[describe] exposes the function signature
// ─────────────────────────────────────────────────────────────────────

#[test]
fn describe_exposes_signature() {
    assert_eq!(AddSignature.name(), "add");
    assert_eq!(
        AddSignature.doc_comment(),
        Some("Adds two numbers.\nLonger text.")
    );
    assert_eq!(
        AddSignature.parameter_annotation("a"),
        Some(&Annotation::described(HostType::Integer, "first addend"))
    );
    assert_eq!(AddSignature.return_annotation(), Some(&HostType::String));

    assert_eq!(FunctionNoDocstringSignature.doc_comment(), None);
    assert_eq!(SampleFunctionSignature.return_annotation(), None);
    assert_eq!(
        FunctionMissingDescriptionSignature.parameter_annotation("param2"),
        Some(&Annotation::Bare(HostType::Float))
    );
    assert_eq!(
        CountThingsSignature.parameter_annotation("things"),
        Some(&Annotation::described(
            HostType::other("Vec<String>"),
            "Things to count."
        ))
    );
    assert_eq!(
        CountThingsSignature.return_annotation(),
        Some(&HostType::Integer)
    );
    assert_eq!(
        ParseNumberSignature.return_annotation(),
        Some(&HostType::String)
    );
}

#[test]
fn described_functions_remain_callable() {
    assert_eq!(add(2, 3), "5");
    assert_eq!(function3(true), "yes");
    assert_eq!(count_things(vec!["a".into()]), 1);
    assert_eq!(parse_number("42").unwrap(), "42");
    sample_function("x".into(), 1);
    function_no_docstring("a".into(), "b".into());
    function_missing_description("a".into(), 0.5);
    blank_doc();
}

// ─────────────────────────────────────────────────────────────────────
// 2. Introspection
// ─────────────────────────────────────────────────────────────────────

#[test]
fn introspect_sample_function() {
    let generator = Generator::default();
    let result = generator.introspect(&SampleFunctionSignature).unwrap();

    assert_eq!(result.name, "sample_function");
    assert_eq!(result.description, "This function does something.");

    let value = result.to_value();
    assert_eq!(value["parameters"]["type"], "object");
    assert_eq!(value["parameters"]["required"], json!(["param1", "param2"]));
    assert_eq!(
        value["parameters"]["properties"]["param1"],
        json!({ "type": "string", "description": "The first parameter" })
    );
    assert_eq!(
        value["parameters"]["properties"]["param2"],
        json!({ "type": "integer", "description": "The second integer parameter" })
    );
}

#[test]
fn add_scenario_matches_expected_descriptor() {
    let descriptor = introspect(&AddSignature, true).unwrap();
    assert_eq!(
        descriptor.to_value(),
        json!({
            "name": "add",
            "description": "Adds two numbers.",
            "parameters": {
                "type": "object",
                "properties": {
                    "a": { "type": "integer", "description": "first addend" },
                    "b": { "type": "integer", "description": "second addend" }
                },
                "required": ["a", "b"]
            }
        })
    );
}

#[test]
fn strict_introspection_failures() {
    let generator = Generator::new(GeneratorConfig::new().with_strict(true));

    assert_eq!(
        generator.introspect(&FunctionNoDocstringSignature),
        Err(SchemaError::missing_docstring("function_no_docstring"))
    );
    assert_eq!(
        generator.introspect(&FunctionMissingDescriptionSignature),
        Err(SchemaError::missing_description(
            "function_missing_description",
            "param1"
        ))
    );

    let no_annotations = FunctionSignature::new("function_no_annotations")
        .with_doc("\n    Function description.\n    ")
        .with_parameter("param1", Annotation::Absent)
        .with_parameter("param2", Annotation::Absent);
    assert_eq!(
        generator.introspect(&no_annotations),
        Err(SchemaError::missing_annotation(
            "function_no_annotations",
            "param1"
        ))
    );
}

#[test]
fn strict_rejects_blank_docstrings() {
    assert_eq!(BlankDocSignature.doc_comment(), Some(""));
    assert_eq!(
        introspect(&BlankDocSignature, true),
        Err(SchemaError::missing_docstring("blank_doc"))
    );

    let signatures = load_manifest(r#"{ "name": "f", "doc": "" }"#).unwrap();
    assert_eq!(
        introspect(&signatures[0], true),
        Err(SchemaError::missing_docstring("f"))
    );
    assert_eq!(introspect(&signatures[0], false).unwrap().description, "");
}

#[test]
fn lenient_introspection_defaults() {
    let generator = Generator::new(GeneratorConfig::new().with_strict(false));

    let result = generator.introspect(&FunctionNoDocstringSignature).unwrap();
    assert_eq!(result.description, "");

    let result = generator
        .introspect(&FunctionMissingDescriptionSignature)
        .unwrap();
    assert_eq!(
        result.parameter("param1"),
        Some(&ParameterDescriptor::new("string", ""))
    );
    assert_eq!(
        result.parameter("param2"),
        Some(&ParameterDescriptor::new("number", ""))
    );

    let no_annotations = FunctionSignature::new("function_no_annotations")
        .with_doc("Function description.")
        .with_parameter("param1", Annotation::Absent)
        .with_parameter("param2", Annotation::Absent);
    let result = generator.introspect(&no_annotations).unwrap();
    assert_eq!(
        result.to_value()["parameters"]["properties"],
        json!({
            "param1": { "type": "string", "description": "" },
            "param2": { "type": "string", "description": "" }
        })
    );
}

#[test]
fn unmapped_described_type_is_unknown() {
    let result = introspect(&CountThingsSignature, true).unwrap();
    assert_eq!(
        result.parameter("things"),
        Some(&ParameterDescriptor::new("unknown", "Things to count."))
    );
}

#[test]
fn empty_described_text_yields_empty_description() {
    let sig = FunctionSignature::new("f")
        .with_doc("Doc.")
        .with_parameter("x", Annotation::described(HostType::Boolean, ""));

    let result = introspect(&sig, true).unwrap();
    assert_eq!(
        result.parameter("x"),
        Some(&ParameterDescriptor::new("boolean", ""))
    );
}

// ─────────────────────────────────────────────────────────────────────
// 3. Configuration
// ─────────────────────────────────────────────────────────────────────

#[test]
fn custom_type_map_applies() {
    let type_map = TypeMap::empty()
        .with(HostType::String, "custom_string")
        .with(HostType::other("Vec<String>"), "array");
    let generator = Generator::new(GeneratorConfig::new().with_type_map(type_map));

    let result = generator.introspect(&CountThingsSignature).unwrap();
    assert_eq!(result.parameter("things").unwrap().schema_type, "array");

    let result = generator.introspect(&SampleFunctionSignature).unwrap();
    assert_eq!(result.parameter("param1").unwrap().schema_type, "custom_string");
    assert_eq!(result.parameter("param2").unwrap().schema_type, "unknown");
}

#[test]
fn generate_with_name_mapping() {
    let func1 = FunctionSignature::new("func1").with_doc("Function one");
    let func2 = FunctionSignature::new("func2").with_doc("Function two");
    let func3 = FunctionSignature::new("func3").with_doc("Function three");

    let generator =
        Generator::new(GeneratorConfig::new().with_name_mappings([("func2", "custom_func2")]));
    let tools = generator.generate([&func1, &func2, &func3]).unwrap();

    assert_eq!(tools.len(), 3);
    assert_eq!(tools[0].function.name, "func1");
    assert_eq!(tools[1].function.name, "custom_func2");
    assert_eq!(tools[1].function.description, "Function two");
    assert_eq!(tools[2].function.name, "func3");
}

#[test]
fn name_mapping_errors_report_declared_name() {
    let generator =
        Generator::new(GeneratorConfig::new().with_name_mappings([("function_no_docstring", "x")]));
    let err = generator.introspect(&FunctionNoDocstringSignature).unwrap_err();
    assert_eq!(err.function(), "function_no_docstring");
}

// ─────────────────────────────────────────────────────────────────────
// 4. Generation
// ─────────────────────────────────────────────────────────────────────

#[test]
fn generate_tools_matches_introspection() {
    let functions: [&dyn Introspect; 3] = [&SampleFunctionSignature, &AddSignature, &Function3Signature];
    let tools = generate_tools(functions).unwrap();
    assert_eq!(tools.len(), 3);

    for (tool, function) in tools.iter().zip(functions) {
        let value = tool.to_value();
        assert_eq!(value["type"], "function");
        assert_eq!(tool.function, introspect(function, true).unwrap());
    }
}

#[test]
fn return_type_checking() {
    let generator = Generator::new(GeneratorConfig::new().with_strict(false));
    let err = generator
        .generate([&AddSignature as &dyn Introspect, &CountThingsSignature])
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::invalid_return_type("count_things", "integer")
    );
    assert!(err.to_string().contains("count_things"));
}

#[test]
fn result_returns_are_checked_by_their_ok_type() {
    let tools = generate_tools([&ParseNumberSignature]).unwrap();
    assert_eq!(tools[0].function.name, "parse_number");
}

#[test]
fn generate_json_is_serializable() {
    let generator = Generator::default();
    let value = generator.generate_json([&AddSignature]).unwrap();
    let text = serde_json::to_string(&value).unwrap();
    assert!(text.starts_with(r#"[{"type":"function","function":{"name":"add""#));
}

// ─────────────────────────────────────────────────────────────────────
// 5. #[describe_methods]
// ─────────────────────────────────────────────────────────────────────

struct TestClass;

#[describe_methods]
impl TestClass {
    #[describe]
    /// This method does something.
    fn some_method(
        &self,
        /// The first parameter
        param1: String,
        /// The second parameter
        param2: String,
    ) -> String {
        format!("{param1}{param2}")
    }

    #[describe]
    /// This method does something.
    fn no_args_method(&self) {}

    fn helper(&self) -> u8 {
        7
    }
}

#[test]
fn describe_methods_lists_marked_methods() {
    let signatures = TestClass::signatures();
    let names: Vec<_> = signatures.iter().map(|sig| sig.name()).collect();
    assert_eq!(names, ["some_method", "no_args_method"]);

    assert_eq!(TestClassSomeMethodSignature.parameters().len(), 3);
    assert_eq!(
        TestClassSomeMethodSignature.parameter_annotation("self"),
        Some(&Annotation::Absent)
    );

    let instance = TestClass;
    assert_eq!(instance.some_method("a".into(), "b".into()), "ab");
    instance.no_args_method();
    assert_eq!(instance.helper(), 7);
}

#[test]
fn introspect_methods_ignoring_receiver() {
    let generator = Generator::new(GeneratorConfig::new().with_ignore_first_param(true));

    let result = generator.introspect(&TestClassSomeMethodSignature).unwrap();
    assert_eq!(result.parameters.required, ["param1", "param2"]);
    assert_eq!(
        result.parameter("param1").unwrap().description,
        "The first parameter"
    );
    assert_eq!(
        result.parameter("param2").unwrap().description,
        "The second parameter"
    );

    let result = generator.introspect(&TestClassNoArgsMethodSignature).unwrap();
    assert_eq!(result.description, "This method does something.");
    assert!(result.parameters.properties.is_empty());

    let tools = generator.generate(TestClass::signatures()).unwrap();
    assert_eq!(tools.len(), 2);
}

#[test]
fn receiver_is_unannotated_without_ignore_first_param() {
    let err = Generator::default()
        .introspect(&TestClassSomeMethodSignature)
        .unwrap_err();
    assert_eq!(err, SchemaError::missing_annotation("some_method", "self"));
}

// ─────────────────────────────────────────────────────────────────────
// 6. Manifests
// ─────────────────────────────────────────────────────────────────────

#[test]
fn manifest_signatures_generate_tools() {
    let signatures = load_manifest(
        r#"[
            {
                "name": "lookup",
                "doc": "Finds a record.\nDetails follow.",
                "returns": "string",
                "parameters": [
                    { "name": "id", "type": "integer", "description": "Record key" },
                    { "name": "verbose", "type": "boolean", "description": "" }
                ]
            },
            { "name": "ping", "doc": "Checks liveness." }
        ]"#,
    )
    .unwrap();

    let tools = Generator::default().generate(&signatures).unwrap();
    assert_eq!(
        serde_json::to_value(&tools).unwrap(),
        json!([
            {
                "type": "function",
                "function": {
                    "name": "lookup",
                    "description": "Finds a record.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer", "description": "Record key" },
                            "verbose": { "type": "boolean", "description": "" }
                        },
                        "required": ["id", "verbose"]
                    }
                }
            },
            {
                "type": "function",
                "function": {
                    "name": "ping",
                    "description": "Checks liveness.",
                    "parameters": { "type": "object", "properties": {}, "required": [] }
                }
            }
        ])
    );
}
