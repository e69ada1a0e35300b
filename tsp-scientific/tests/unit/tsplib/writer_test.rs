use super::*;
use tsp_core::models::Tour;

fn write_to_string(result: &TourResult, name: &str) -> Result<String, GenericError> {
    let mut buffer = Vec::new();
    result.write_tsplib(name, BufWriter::new(&mut buffer))?;

    Ok(String::from_utf8(buffer).expect("invalid utf8"))
}

#[test]
fn can_write_tour() {
    let result = TourResult::new(80., Tour::new(vec![0, 1, 3, 2, 0]));

    let content = write_to_string(&result, "four_cities").expect("cannot write tour");

    assert_eq!(
        content,
        "NAME : four_cities\nTYPE : TOUR\nCOMMENT : cost 80\nDIMENSION : 4\nTOUR_SECTION\n1\n2\n4\n3\n-1\nEOF\n"
    );
}

#[test]
fn can_write_single_city_tour() {
    let result = TourResult::new(0., Tour::new(vec![0, 0]));

    let content = write_to_string(&result, "single").expect("cannot write tour");

    assert!(content.contains("DIMENSION : 1\nTOUR_SECTION\n1\n-1\n"));
}

#[test]
fn can_reject_unsolvable_result() {
    let result = write_to_string(&TourResult::unsolvable(), "disconnected");

    assert_eq!(result, Err("cannot write tour: no tour exists".into()));
}
