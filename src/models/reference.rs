use serde::Serialize;

/// One plotting command in the course reference, with usage guidance.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlotCommand {
    pub command: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub tip: &'static str,
}

/// A themed group of reference commands.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommandCategory {
    pub name: &'static str,
    pub commands: &'static [PlotCommand],
}

/// The matplotlib command reference served to the course UI.
///
/// This is static course content, kept verbatim from the lecture notes; the
/// tool itself does not execute any of it.
pub const PLOT_REFERENCE: [CommandCategory; 6] = [
    CommandCategory {
        name: "Figure & Layout",
        commands: &[
            PlotCommand {
                command: "plt.figure(figsize, dpi, facecolor)",
                description: "Creates a new figure. figsize=(width, height) in inches, dpi \
                              controls resolution, facecolor sets background.",
                example: "fig = plt.figure(figsize=(10, 6), dpi=120)",
                tip: "Always set figsize for consistent output across displays.",
            },
            PlotCommand {
                command: "plt.subplot(nrows, ncols, index)",
                description: "Adds a subplot to the current figure. Grid of nrows x ncols, \
                              index is 1-based position.",
                example: "plt.subplot(2, 3, 1)  # 2x3 grid, position 1 (top-left)",
                tip: "Can also use shorthand: plt.subplot(231)",
            },
            PlotCommand {
                command: "plt.subplots(nrows, ncols)",
                description: "Creates figure and array of Axes in one call. Returns (fig, axes) \
                              tuple.",
                example: "fig, axes = plt.subplots(2, 2, figsize=(10, 10))",
                tip: "Preferred over repeated subplot() calls. axes is a 2D array for grid \
                      access.",
            },
            PlotCommand {
                command: "plt.tight_layout(pad)",
                description: "Automatically adjusts subplot spacing to prevent overlap. pad \
                              controls padding.",
                example: "plt.tight_layout(pad=1.5)",
                tip: "Call this before plt.show() or plt.savefig().",
            },
            PlotCommand {
                command: "fig.add_subplot(pos, projection)",
                description: "Adds subplot with optional projection (e.g., 'polar', '3d').",
                example: "ax = fig.add_subplot(111, projection='polar')",
                tip: "Use for mixed projections in the same figure.",
            },
            PlotCommand {
                command: "plt.GridSpec(nrows, ncols)",
                description: "Advanced grid layout specification for unequal subplot sizes.",
                example: "gs = plt.GridSpec(2, 3); ax1 = fig.add_subplot(gs[0, :])",
                tip: "Use slicing to span multiple grid cells.",
            },
        ],
    },
    CommandCategory {
        name: "Image Display",
        commands: &[
            PlotCommand {
                command: "plt.imshow(X, cmap, vmin, vmax, interpolation)",
                description: "Displays a 2D array as an image. cmap maps values to colors. \
                              vmin/vmax clip the colormap range.",
                example: "plt.imshow(image, cmap='gray', vmin=0, vmax=255)",
                tip: "For grayscale images, always specify cmap='gray' to avoid default color \
                      mapping.",
            },
            PlotCommand {
                command: "plt.colorbar(mappable, ax, fraction, pad)",
                description: "Adds a color scale bar to the plot, showing the mapping between \
                              data values and colors.",
                example: "im = plt.imshow(data, cmap='hot'); plt.colorbar(im)",
                tip: "fraction=0.046, pad=0.04 gives a well-proportioned colorbar.",
            },
            PlotCommand {
                command: "plt.axis('off')",
                description: "Hides all axis lines, tick marks, and labels. Essential for clean \
                              image display.",
                example: "plt.imshow(img, cmap='gray'); plt.axis('off')",
                tip: "Always use when displaying images to remove distracting borders.",
            },
        ],
    },
    CommandCategory {
        name: "Plotting Functions",
        commands: &[
            PlotCommand {
                command: "plt.plot(x, y, fmt, linewidth, label)",
                description: "Creates a 2D line plot. fmt is a format string (e.g., 'r--' for \
                              red dashed). label is for legend.",
                example: "plt.plot(x, y, 'b-', linewidth=2, label='Signal')",
                tip: "Format: '[color][marker][linestyle]'. 'r-o' = red solid with circles.",
            },
            PlotCommand {
                command: "plt.scatter(x, y, c, s, cmap, alpha)",
                description: "Creates a scatter plot. c maps point colors, s controls size, \
                              alpha is transparency.",
                example: "plt.scatter(x, y, c=values, cmap='viridis', s=50, alpha=0.7)",
                tip: "c can be a single color or an array for color-mapped data.",
            },
            PlotCommand {
                command: "plt.bar(x, height, color, width, edgecolor)",
                description: "Creates vertical bar chart. x is position, height is bar heights.",
                example: "plt.bar(['A', 'B', 'C'], [10, 20, 15], color='steelblue')",
                tip: "Use plt.barh() for horizontal bars.",
            },
            PlotCommand {
                command: "plt.hist(x, bins, color, alpha, edgecolor)",
                description: "Creates a histogram showing data distribution. bins controls the \
                              number of intervals.",
                example: "plt.hist(data, bins=50, color='purple', alpha=0.7, edgecolor='white')",
                tip: "Use density=True for normalized histograms (probability density).",
            },
            PlotCommand {
                command: "plt.fill_between(x, y1, y2, alpha, color)",
                description: "Fills the area between two curves y1 and y2.",
                example: "plt.fill_between(x, 0, y, alpha=0.3, color='blue')",
                tip: "Great for confidence intervals and area charts.",
            },
            PlotCommand {
                command: "plt.contour(X, Y, Z, levels) / plt.contourf()",
                description: "Creates contour lines (contour) or filled contour plots (contourf) \
                              from 2D data.",
                example: "plt.contourf(X, Y, Z, levels=20, cmap='RdBu')",
                tip: "Pair with plt.colorbar() for scale reference.",
            },
        ],
    },
    CommandCategory {
        name: "Labels & Annotations",
        commands: &[
            PlotCommand {
                command: "plt.title(label, fontsize, fontweight, pad)",
                description: "Sets the title of the current axes/subplot.",
                example: "plt.title('Spatial Difference Analysis', fontsize=14, \
                          fontweight='bold')",
                tip: "Use fig.suptitle() for an overall figure title above all subplots.",
            },
            PlotCommand {
                command: "plt.xlabel(label) / plt.ylabel(label)",
                description: "Sets axis labels with optional fontsize and style parameters.",
                example: "plt.xlabel('Pixel Intensity', fontsize=12)",
                tip: "Use LaTeX: plt.xlabel(r'$\\alpha$ coefficient')",
            },
            PlotCommand {
                command: "plt.legend(loc, fontsize, framealpha)",
                description: "Displays a legend for labeled plot elements.",
                example: "plt.legend(loc='upper right', fontsize=10, framealpha=0.8)",
                tip: "loc='best' lets matplotlib pick optimal placement.",
            },
            PlotCommand {
                command: "ax.annotate(text, xy, xytext, arrowprops)",
                description: "Adds an annotation with optional arrow pointing to xy from xytext.",
                example: "ax.annotate('Peak', xy=(3.14, 1), xytext=(4, 1.3), \
                          arrowprops=dict(arrowstyle='->'))",
                tip: "Essential for highlighting specific data points in publications.",
            },
            PlotCommand {
                command: "ax.text(x, y, s, fontsize, ha, va)",
                description: "Places text at data coordinates (x, y).",
                example: "ax.text(0.5, 0.5, 'Center', ha='center', va='center', \
                          transform=ax.transAxes)",
                tip: "Use transform=ax.transAxes for axes-relative coordinates (0-1).",
            },
        ],
    },
    CommandCategory {
        name: "Styling & Configuration",
        commands: &[
            PlotCommand {
                command: "plt.grid(visible, alpha, linestyle)",
                description: "Toggles grid lines on the current axes.",
                example: "plt.grid(True, alpha=0.3, linestyle='--')",
                tip: "Subtle grids (alpha=0.3) improve readability without clutter.",
            },
            PlotCommand {
                command: "plt.xlim(left, right) / plt.ylim(bottom, top)",
                description: "Sets the display range for x/y axes.",
                example: "plt.xlim(0, 256); plt.ylim(0, 5000)",
                tip: "Useful for zooming into specific regions of interest.",
            },
            PlotCommand {
                command: "plt.style.use(style)",
                description: "Applies a predefined visual style to all subsequent plots.",
                example: "plt.style.use('seaborn-v0_8-whitegrid')",
                tip: "Available styles: 'ggplot', 'seaborn', 'dark_background', 'bmh', etc.",
            },
            PlotCommand {
                command: "plt.savefig(fname, dpi, bbox_inches, transparent)",
                description: "Saves the current figure to a file (PNG, PDF, SVG, etc.).",
                example: "plt.savefig('output.png', dpi=300, bbox_inches='tight')",
                tip: "bbox_inches='tight' removes whitespace. Use before plt.show().",
            },
        ],
    },
    CommandCategory {
        name: "Output & Display",
        commands: &[
            PlotCommand {
                command: "plt.show()",
                description: "Renders and displays all open figures. In notebooks, triggers \
                              inline display.",
                example: "plt.show()",
                tip: "In scripts, this blocks execution until the window is closed.",
            },
            PlotCommand {
                command: "plt.close(fig)",
                description: "Closes a figure window and frees memory. 'all' closes everything.",
                example: "plt.close('all')",
                tip: "Always close figures in loops to prevent memory leaks.",
            },
        ],
    },
];
