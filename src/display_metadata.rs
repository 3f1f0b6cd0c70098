use crate::metadata::ImageMetadata;

pub fn print_metadata(metadata: &ImageMetadata) {
    print_field("Patient Name", metadata.patient_name.as_ref());
    print_field("Patient ID", metadata.patient_id.as_ref());

    print_field("Study Date", metadata.study_date.as_ref());
    print_field("Modality", metadata.modality.as_ref());

    print_field("Series Description", metadata.series_description.as_ref());

    if let Some(dims) = &metadata.dimensions {
        println!("{:20}: {}", "Dimensions", dims);
    }

    println!();
}

fn print_field(name: &str, value: Option<&String>) {
    if let Some(v) = value {
        println!("{name:20}: {v}");
    }
}
