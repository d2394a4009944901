/// The lightness thresholds for naming grays, paired with the name used below
/// each threshold.
const GRAYS: [(u8, &str); 4] = [
    (20, "Black"),
    (40, "Dark Gray"),
    (60, "Gray"),
    (80, "Light Gray"),
];

/// The exclusive upper hue bounds for naming chromatic colors. Red also
/// covers hues from 345° up, which the final entry catches.
const HUES: [(u16, &str); 9] = [
    (15, "Red"),
    (45, "Orange"),
    (75, "Yellow"),
    (150, "Green"),
    (195, "Cyan"),
    (255, "Blue"),
    (285, "Purple"),
    (345, "Pink"),
    (360, "Red"),
];

/// Saturation below this percentage is named as a gray.
const GRAY_SATURATION: u8 = 10;

/// Determine the name of the color with the given rounded HSL coordinates.
///
/// Grays are named by lightness alone. Chromatic colors are named by hue and
/// prefixed with `Dark ` below 30% lightness and `Light ` above 70%.
pub(crate) fn to_name(hue: u16, saturation: u8, lightness: u8) -> String {
    if saturation < GRAY_SATURATION {
        let name = GRAYS
            .iter()
            .find(|(bound, _)| lightness < *bound)
            .map_or("White", |(_, name)| *name);
        return name.to_string();
    }

    let name = HUES
        .iter()
        .find(|(bound, _)| hue < *bound)
        .map_or("Red", |(_, name)| *name);

    if lightness < 30 {
        format!("Dark {}", name)
    } else if lightness > 70 {
        format!("Light {}", name)
    } else {
        name.to_string()
    }
}
