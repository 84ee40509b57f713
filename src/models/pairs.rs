use serde::Serialize;

/// A curated image pair known to produce a meaningful spatial difference,
/// with the course text explaining why.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CuratedPair {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image1: &'static str,
    pub image2: &'static str,
    pub theory: &'static str,
}

/// Curated image pairs that produce meaningful spatial differences.
///
/// Filenames follow the DIP3E chapter 2 image set; pairs stay useful even if
/// only a subset of the files is installed, since each references its own
/// two inputs.
pub const CURATED_PAIRS: [CuratedPair; 6] = [
    CuratedPair {
        id: "angiography",
        name: "Digital Subtraction Angiography",
        description: "Classic medical imaging technique. The mask image (pre-contrast) is \
                      subtracted from the live image (post-contrast injection) to isolate blood \
                      vessels. This is one of the most important applications of image \
                      subtraction in medical imaging.",
        image1: "Fig0228(a)(angiography_mask_image).tif",
        image2: "Fig0228(b)(angiography_live_ image).tif",
        theory: "Digital Subtraction Angiography (DSA) works by acquiring a 'mask' image before \
                 contrast agent injection, then a 'live' image after injection. Subtracting mask \
                 from live removes static anatomy (bones, soft tissue), leaving only the \
                 contrast-filled vessels visible. Mathematically: g(x,y) = |f_live(x,y) - \
                 f_mask(x,y)|",
    },
    CuratedPair {
        id: "dental_xray",
        name: "Dental X-ray Subtraction",
        description: "Dental radiograph subtraction reveals changes between visits (bone loss, \
                      lesion progression). The original X-ray and its mask are subtracted to \
                      enhance diagnostic features.",
        image1: "Fig0230(a)(dental_xray).tif",
        image2: "Fig0230(b)(dental_xray_mask).tif",
        theory: "Dental subtraction radiography is used to detect subtle changes in bone density \
                 between patient visits. By subtracting a baseline radiograph from a follow-up \
                 image, clinicians can identify areas of bone loss or regeneration that might be \
                 invisible in individual images.",
    },
    CuratedPair {
        id: "tungsten",
        name: "Shading Correction (Tungsten Filament)",
        description: "Demonstrates shading correction by subtracting non-uniform illumination. \
                      The sensor shading pattern is removed from the filament image to produce a \
                      uniformly illuminated result.",
        image1: "Fig0229(a)(tungsten_filament_shaded).tif",
        image2: "Fig0229(b)(tungsten_sensor_shading).tif",
        theory: "Shading correction compensates for non-uniform sensor response or illumination. \
                 If f(x,y) is the shaded image and s(x,y) is the shading pattern, then the \
                 corrected image is approximately f(x,y) - s(x,y). This is essential in \
                 microscopy, astronomical imaging, and industrial inspection.",
    },
    CuratedPair {
        id: "einstein_low_med",
        name: "Einstein: Low vs Medium Contrast",
        description: "Compares the same Einstein portrait at different contrast levels. The \
                      difference reveals which regions gain or lose intensity as contrast \
                      increases.",
        image1: "Fig0241(a)(einstein low contrast).tif",
        image2: "Fig0241(b)(einstein med contrast).tif",
        theory: "Contrast is the difference in luminance that makes an object distinguishable. \
                 Comparing images at different contrast levels through subtraction reveals how \
                 pixel intensities are redistributed. This is fundamental to understanding \
                 contrast enhancement techniques like histogram equalization.",
    },
    CuratedPair {
        id: "einstein_med_high",
        name: "Einstein: Medium vs High Contrast",
        description: "Continues the contrast analysis. Subtracting medium from high contrast \
                      shows the most extreme intensity redistributions.",
        image1: "Fig0241(b)(einstein med contrast).tif",
        image2: "Fig0241(c)(einstein high contrast).tif",
        theory: "As contrast increases, the histogram of the image stretches to cover a wider \
                 range of intensity values. The spatial difference between medium and high \
                 contrast versions highlights edges and texture regions where intensity changes \
                 are most dramatic.",
    },
    CuratedPair {
        id: "einstein_low_high",
        name: "Einstein: Low vs High Contrast",
        description: "Maximum contrast difference. Shows the full range of intensity \
                      redistribution from lowest to highest contrast version.",
        image1: "Fig0241(a)(einstein low contrast).tif",
        image2: "Fig0241(c)(einstein high contrast).tif",
        theory: "The maximum spatial difference between low and high contrast versions reveals \
                 the complete transformation applied. This difference image essentially \
                 visualizes the 'contrast enhancement function' applied spatially across the \
                 image.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_ids_are_unique() {
        let mut ids: Vec<&str> = CURATED_PAIRS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CURATED_PAIRS.len());
    }

    #[test]
    fn test_pairs_reference_distinct_images() {
        for pair in &CURATED_PAIRS {
            assert_ne!(pair.image1, pair.image2, "pair {}", pair.id);
        }
    }
}
