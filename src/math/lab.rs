use super::color::{Lab, Rgb, Xyz};

/// D65 reference white, Y scaled to 100.
pub const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

/// sRGB decoding curve used for XYZ (threshold 0.04045).
fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB -> XYZ (D65), scaled x100.
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let [r, g, b] = rgb.to_unit().map(srgb_to_linear);
    Xyz::new(
        (r * 0.4124 + g * 0.3576 + b * 0.1805) * 100.0,
        (r * 0.2126 + g * 0.7152 + b * 0.0722) * 100.0,
        (r * 0.0193 + g * 0.1192 + b * 0.9505) * 100.0,
    )
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// XYZ -> CIE-LAB against the D65 white point.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let xyz = Xyz::new(xyz.x, xyz.y, xyz.z);
    let fx = lab_f(xyz.x / D65_WHITE.x);
    let fy = lab_f(xyz.y / D65_WHITE.y);
    let fz = lab_f(xyz.z / D65_WHITE.z);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}
