//! Checks that the version modules expose the same builder surface while
//! keeping the datatype differences each FHIR release introduced.
#![cfg(any(feature = "R4B", feature = "R5"))]

use serde_json::json;

#[cfg(feature = "R4B")]
#[test]
fn r4b_patient_builder_matches_wire_format() {
    use vireo_fhir_lib::r4b::{AdministrativeGender, HumanName, Patient};

    let patient = Patient::builder()
        .id("example")
        .name(HumanName::builder().family("Chalmers").build())
        .gender(AdministrativeGender::Male)
        .build();

    let value = serde_json::to_value(&patient).unwrap();
    assert_eq!(value["id"], json!("example"));
    assert_eq!(value["name"][0]["family"], json!("Chalmers"));
    assert_eq!(value["gender"], json!("male"));
}

#[cfg(feature = "R5")]
#[test]
fn r5_codeable_reference_serializes_both_parts() {
    use vireo_fhir_lib::r5::{CodeableConcept, CodeableReference, Coding, Reference};

    let codeable_reference = CodeableReference::builder()
        .concept(
            CodeableConcept::builder()
                .coding(
                    Coding::builder()
                        .system("http://snomed.info/sct")
                        .code("260385009")
                        .build(),
                )
                .build(),
        )
        .reference(Reference::builder().reference("Condition/example").build())
        .build();

    let value = serde_json::to_value(&codeable_reference).unwrap();
    assert_eq!(
        value["concept"]["coding"][0]["code"],
        json!("260385009")
    );
    assert_eq!(value["reference"]["reference"], json!("Condition/example"));
}

#[cfg(feature = "R5")]
#[test]
fn r5_observation_accepts_reference_values() {
    use vireo_fhir_lib::r5::{Observation, ObservationValue, Reference};

    let observation = Observation::builder()
        .value(ObservationValue::Reference(
            Reference::builder().reference("Specimen/genetics").build(),
        ))
        .build();

    let value = serde_json::to_value(&observation).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("valueReference"));
    assert!(!object.contains_key("valueQuantity"));
}

#[cfg(feature = "R5")]
#[test]
fn r5_basic_created_is_a_full_date_time() {
    use vireo_fhir_lib::PrecisionDateTime;
    use vireo_fhir_lib::r5::Basic;

    let created = PrecisionDateTime::parse("2013-05-14T09:00:00+02:00").unwrap();
    let basic = Basic::builder().created(created).build();

    let value = serde_json::to_value(&basic).unwrap();
    assert_eq!(value["created"], json!("2013-05-14T09:00:00+02:00"));
}

#[cfg(feature = "R5")]
#[test]
fn r5_quantity_supports_the_ad_comparator() {
    use vireo_fhir_lib::PreciseDecimal;
    use vireo_fhir_lib::r5::{Quantity, QuantityComparator};

    let quantity = Quantity::builder()
        .value("40".parse::<PreciseDecimal>().unwrap())
        .comparator(QuantityComparator::Ad)
        .unit("mL")
        .build();

    let value = serde_json::to_value(&quantity).unwrap();
    assert_eq!(value["comparator"], json!("ad"));
}

#[cfg(feature = "R5")]
#[test]
fn r5_integer64_primitive_is_available() {
    use vireo_fhir_lib::r5::Integer64;

    let big: Integer64 = 9_007_199_254_740_993_i64.into();
    let value = serde_json::to_value(&big).unwrap();
    assert_eq!(value, json!(9_007_199_254_740_993_i64));
}
