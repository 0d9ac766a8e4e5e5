#![cfg(feature = "R4")]

use serde_json::json;

use vireo_fhir_lib::r4::{
    AdministrativeGender, CodeableConcept, Coding, Extension, ExtensionValue, HumanName,
    Identifier, Narrative, NarrativeStatus, Observation, ObservationEffective, ObservationStatus,
    ObservationValue, Patient, PatientContact, PatientDeceased, Quantity, Reference, Resource,
};
use vireo_fhir_lib::{ChoiceElement, PreciseDecimal, PrecisionDate, PrecisionDateTime};

fn ext(url: &str, value: &str) -> Extension {
    Extension::builder(url)
        .value(ExtensionValue::String(value.into()))
        .build()
}

#[test]
fn untouched_builder_serializes_to_empty_object() {
    let patient = Patient::builder().build();
    assert_eq!(serde_json::to_value(&patient).unwrap(), json!({}));
}

#[test]
fn id_only_resource_has_single_key() {
    let patient = Patient::builder().id("p1").build();
    assert_eq!(serde_json::to_value(&patient).unwrap(), json!({"id": "p1"}));
}

#[test]
fn extensions_preserve_insertion_order() {
    let patient = Patient::builder()
        .extension(ext("http://example.org/a", "first"))
        .extension(ext("http://example.org/b", "second"))
        .extension(ext("http://example.org/c", "third"))
        .build();

    let extensions = patient.extension.as_ref().unwrap();
    assert_eq!(extensions.len(), 3);
    assert_eq!(extensions[0].url, "http://example.org/a");
    assert_eq!(extensions[1].url, "http://example.org/b");
    assert_eq!(extensions[2].url, "http://example.org/c");
}

#[test]
fn modifier_extensions_are_kept_separate_from_extensions() {
    let patient = Patient::builder()
        .extension(ext("http://example.org/plain", "x"))
        .modifier_extension(ext("http://example.org/modifier", "y"))
        .build();

    assert_eq!(patient.extension.as_ref().unwrap().len(), 1);
    assert_eq!(patient.modifier_extension.as_ref().unwrap().len(), 1);

    let value = serde_json::to_value(&patient).unwrap();
    assert_eq!(
        value["modifierExtension"][0]["url"],
        "http://example.org/modifier"
    );
}

#[test]
fn untouched_collections_stay_absent_not_empty() {
    let patient = Patient::builder().id("p2").active(true).build();
    let value = serde_json::to_value(&patient).unwrap();

    let object = value.as_object().unwrap();
    assert!(!object.contains_key("extension"));
    assert!(!object.contains_key("contained"));
    assert!(!object.contains_key("identifier"));
    assert!(!object.contains_key("name"));
    assert_eq!(value["active"], json!(true));
}

#[test]
fn last_write_wins_on_scalar_setters() {
    let patient = Patient::builder()
        .id("first")
        .id("second")
        .gender(AdministrativeGender::Female)
        .gender(AdministrativeGender::Other)
        .build();

    assert_eq!(patient.id.as_deref(), Some("second"));
    let value = serde_json::to_value(&patient).unwrap();
    assert_eq!(value["gender"], json!("other"));
}

#[test]
fn contained_resources_preserve_order() {
    let inner_a = Patient::builder().id("a").build();
    let inner_b = Patient::builder().id("b").build();

    let patient = Patient::builder()
        .contained(inner_a)
        .contained(inner_b)
        .build();

    let value = serde_json::to_value(&patient).unwrap();
    assert_eq!(
        value["contained"],
        json!([
            {"resourceType": "Patient", "id": "a"},
            {"resourceType": "Patient", "id": "b"},
        ])
    );
}

#[test]
fn backbone_builder_does_not_touch_parent_fields() {
    let contact = PatientContact::builder()
        .name(HumanName::builder().family("Chalmers").build())
        .modifier_extension(ext("http://example.org/m", "z"))
        .build();

    assert!(contact.modifier_extension.is_some());
    assert!(contact.extension.is_none());

    let patient = Patient::builder().contact(contact).build();
    assert!(patient.modifier_extension.is_none());
    assert_eq!(patient.contact.as_ref().unwrap().len(), 1);
}

#[test]
fn choice_setter_emits_exactly_one_wire_key() {
    let birth = PrecisionDate::parse("1974-12-25").unwrap();
    let patient = Patient::builder()
        .deceased(PatientDeceased::Boolean(false.into()))
        .birth_date(birth)
        .build();

    let value = serde_json::to_value(&patient).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("deceasedBoolean"));
    assert!(!object.contains_key("deceasedDateTime"));
    assert_eq!(value["birthDate"], json!("1974-12-25"));
}

#[test]
fn choice_overwrite_clears_previous_variant() {
    let when = PrecisionDateTime::parse("2015-02-14T13:42:00+01:00").unwrap();
    let patient = Patient::builder()
        .deceased(PatientDeceased::Boolean(true.into()))
        .deceased(PatientDeceased::DateTime(when.into()))
        .build();

    assert!(patient.deceased_boolean.is_none());
    let value = serde_json::to_value(&patient).unwrap();
    assert_eq!(value["deceasedDateTime"], json!("2015-02-14T13:42:00+01:00"));
    assert!(!value.as_object().unwrap().contains_key("deceasedBoolean"));
}

#[test]
fn choice_variant_reports_wire_field_name() {
    assert_eq!(
        PatientDeceased::Boolean(true.into()).field_name(),
        "deceasedBoolean"
    );
    assert_eq!(
        ObservationValue::String("ok".into()).field_name(),
        "valueString"
    );
}

#[test]
fn element_with_id_and_extension_serializes_as_object() {
    let element = Extension::builder("http://example.org/outer")
        .id("e1")
        .extension(ext("http://example.org/ext", "x"))
        .build();

    let value = serde_json::to_value(&element).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "e1",
            "url": "http://example.org/outer",
            "extension": [
                {"url": "http://example.org/ext", "valueString": "x"}
            ],
        })
    );
}

#[test]
fn observation_quantity_value_keeps_decimal_text() {
    let quantity = Quantity::builder()
        .value("185.40".parse::<PreciseDecimal>().unwrap())
        .unit("lbs")
        .system("http://unitsofmeasure.org")
        .code("[lb_av]")
        .build();

    let observation = Observation::builder()
        .status(ObservationStatus::Final)
        .code(
            CodeableConcept::builder()
                .coding(
                    Coding::builder()
                        .system("http://loinc.org")
                        .code("29463-7")
                        .display("Body Weight")
                        .build(),
                )
                .build(),
        )
        .subject(Reference::builder().reference("Patient/example").build())
        .value(ObservationValue::Quantity(quantity))
        .build();

    let text = serde_json::to_string(&observation).unwrap();
    assert!(text.contains("\"valueQuantity\":{\"value\":185.40"));

    let value = serde_json::to_value(&observation).unwrap();
    assert_eq!(value["status"], json!("final"));
    assert_eq!(value["code"]["coding"][0]["code"], json!("29463-7"));
}

#[test]
fn observation_effective_choice_is_exclusive() {
    let when = PrecisionDateTime::parse("2013-04-02T09:30:10+01:00").unwrap();
    let observation = Observation::builder()
        .effective(ObservationEffective::DateTime(when.into()))
        .build();

    let value = serde_json::to_value(&observation).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("effectiveDateTime"));
    assert!(!object.contains_key("effectivePeriod"));
    assert!(!object.contains_key("effectiveInstant"));
}

#[test]
fn resource_enum_round_trips_with_resource_type_tag() {
    let patient = Patient::builder()
        .id("example")
        .identifier(
            Identifier::builder()
                .system("urn:oid:1.2.36.146.595.217.0.1")
                .value("12345")
                .build(),
        )
        .name(
            HumanName::builder()
                .family("Chalmers")
                .given("Peter")
                .given("James")
                .build(),
        )
        .gender(AdministrativeGender::Male)
        .build();

    let resource = Resource::from(patient);
    let value = serde_json::to_value(&resource).unwrap();
    assert_eq!(value["resourceType"], json!("Patient"));
    assert_eq!(value["name"][0]["given"], json!(["Peter", "James"]));

    let parsed: Resource = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, resource);
}

#[test]
fn narrative_text_attaches_to_domain_resource() {
    let patient = Patient::builder()
        .text(Narrative::new(
            NarrativeStatus::Generated,
            "<div xmlns=\"http://www.w3.org/1999/xhtml\">Peter James Chalmers</div>",
        ))
        .build();

    let value = serde_json::to_value(&patient).unwrap();
    assert_eq!(value["text"]["status"], json!("generated"));
}
