use crate::app::config;

static INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{app_name}</title>
    <style>
        body { font-family: sans-serif; background: #fafafa; display: flex; justify-content: center; padding: 2rem; }
        main { width: 100%; max-width: 40rem; }
        .card { background: #fff; border: 1px solid #e4e4e7; border-radius: 0.5rem; padding: 1.5rem; margin-bottom: 1.5rem; }
        label { display: block; font-weight: 600; margin-top: 1rem; }
        input { width: 100%; box-sizing: border-box; padding: 0.5rem; margin-top: 0.25rem; }
        small { color: #71717a; }
        .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
        button { width: 100%; margin-top: 1.5rem; padding: 0.75rem; background: #6366f1; color: #fff; border: 0; border-radius: 0.375rem; }
        button:disabled { opacity: 0.6; }
        .error { color: #b91c1c; background: #fee2e2; padding: 1rem; border-radius: 0.375rem; }
        img { width: 100%; border-radius: 0.5rem; border: 1px solid #e4e4e7; }
        [hidden] { display: none; }
    </style>
</head>
<body>
<main>
    <form id="generate-form" class="card">
        <h2>AI Image Generator</h2>
        <p><small>Enter a prompt to generate an image. This is a mock implementation.</small></p>

        <label for="prompt">Prompt</label>
        <input id="prompt" name="prompt" placeholder="A beautiful sunset over mountains..." />
        <small>Describe the image you want to generate</small>

        <label for="style">Style (Optional)</label>
        <input id="style" name="style" placeholder="photorealistic, oil painting, digital art..." />
        <small>Optional style description for the image</small>

        <div class="grid">
            <div>
                <label for="width">Width</label>
                <input id="width" name="width" type="number" value="{default_width}" />
                <small>Image width ({min_dimension}-{max_dimension})</small>
            </div>
            <div>
                <label for="height">Height</label>
                <input id="height" name="height" type="number" value="{default_height}" />
                <small>Image height ({min_dimension}-{max_dimension})</small>
            </div>
        </div>

        <button id="submit" type="submit">Generate Image</button>
    </form>

    <section id="result" class="card" hidden>
        <h3>Result</h3>
        <div id="result-error" class="error" hidden></div>
        <div id="result-image" hidden>
            <img id="image" alt="Generated image" />
            <p><small>Image generated successfully! (This is a mock placeholder)</small></p>
        </div>
    </section>
</main>
<script>
    const form = document.getElementById("generate-form");
    const button = document.getElementById("submit");
    const result = document.getElementById("result");
    const resultError = document.getElementById("result-error");
    const resultImage = document.getElementById("result-image");

    function show(response) {
        result.hidden = false;
        if (response.success && response.imageUrl) {
            document.getElementById("image").src = response.imageUrl;
            resultImage.hidden = false;
        } else {
            resultError.textContent = response.error || "Failed to generate image";
            resultError.hidden = false;
        }
    }

    form.addEventListener("submit", async (event) => {
        event.preventDefault();
        result.hidden = true;
        resultError.hidden = true;
        resultImage.hidden = true;

        const data = new FormData(form);
        const body = {
            prompt: data.get("prompt"),
            style: data.get("style") || null,
            width: Number(data.get("width")),
            height: Number(data.get("height")),
        };

        button.disabled = true;
        button.textContent = "Generating...";
        try {
            const res = await fetch("/images/generate", {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify(body),
            });
            show(await res.json());
        } catch (e) {
            show({ success: false });
        } finally {
            button.disabled = false;
            button.textContent = "Generate Image";
        }
    });
</script>
</body>
</html>
"##;

pub fn index_template() -> String {
    INDEX_HTML
        .replace("{app_name}", config::APP_NAME)
        .replace("{default_width}", &config::DEFAULT_DIMENSION.to_string())
        .replace("{default_height}", &config::DEFAULT_DIMENSION.to_string())
        .replace("{min_dimension}", &config::MIN_DIMENSION.to_string())
        .replace("{max_dimension}", &config::MAX_DIMENSION.to_string())
}
